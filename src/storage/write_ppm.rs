use std::io::{self, Write};
use std::path::Path;

/// Writes row-major RGB bytes as a binary P6 PPM.
///
/// `pixels` must hold exactly `width * height * 3` bytes, the layout
/// [`SharedFrameBuffer::snapshot`] produces.
///
/// [`SharedFrameBuffer::snapshot`]: crate::engine::frame_buffer::SharedFrameBuffer::snapshot
pub fn write_ppm(
    pixels: &[u8],
    width: u32,
    height: u32,
    filepath: impl AsRef<Path>,
) -> io::Result<()> {
    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "pixel buffer holds {} bytes, {}x{} needs {}",
                pixels.len(),
                width,
                height,
                expected
            ),
        ));
    }

    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(pixels)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("mandelscope_write_ppm_{}_{}", std::process::id(), name));
        path
    }

    #[test]
    fn writes_header_then_raw_bytes() {
        let pixels: Vec<u8> = vec![
            255, 0, 0, 0, 255, 0, //
            0, 0, 255, 255, 255, 255,
        ];
        let path = temp_path("header");

        write_ppm(&pixels, 2, 2, &path).unwrap();

        let contents = std::fs::read(&path).unwrap();
        let mut expected = b"P6\n2 2\n255\n".to_vec();
        expected.extend_from_slice(&pixels);
        assert_eq!(contents, expected);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejects_a_mis_sized_buffer() {
        let path = temp_path("mis_sized");

        let result = write_ppm(&[0u8; 5], 2, 2, &path);

        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!path.exists());
    }
}
