fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("output")?;
    mandelscope::render_to_ppm("output/mandelbrot.ppm")?;

    Ok(())
}
