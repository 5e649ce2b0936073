use std::collections::HashMap;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "output.png".to_string());

    let decoder = png::Decoder::new(std::fs::File::open(&path)?);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    println!("Image: {}x{} pixels, {:?}", info.width, info.height, info.color_type);

    if info.color_type != png::ColorType::Rgb {
        anyhow::bail!("expected an RGB PNG, got {:?}", info.color_type);
    }

    let mut r_vals = HashMap::new();
    let mut g_vals = HashMap::new();
    let mut b_vals = HashMap::new();

    let mut r_min = u8::MAX;
    let mut r_max = u8::MIN;
    let mut g_min = u8::MAX;
    let mut g_max = u8::MIN;
    let mut b_min = u8::MAX;
    let mut b_max = u8::MIN;

    for chunk in buf[..info.buffer_size()].chunks(3) {
        if chunk.len() == 3 {
            let r = chunk[0];
            let g = chunk[1];
            let b = chunk[2];

            *r_vals.entry(r).or_insert(0u64) += 1;
            *g_vals.entry(g).or_insert(0u64) += 1;
            *b_vals.entry(b).or_insert(0u64) += 1;

            r_min = r_min.min(r);
            r_max = r_max.max(r);
            g_min = g_min.min(g);
            g_max = g_max.max(g);
            b_min = b_min.min(b);
            b_max = b_max.max(b);
        }
    }

    println!("R: range [{}, {}], {} unique values", r_min, r_max, r_vals.len());
    println!("G: range [{}, {}], {} unique values", g_min, g_max, g_vals.len());
    println!("B: range [{}, {}], {} unique values", b_min, b_max, b_vals.len());

    Ok(())
}
