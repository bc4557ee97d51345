//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilestack::TileError;
    use tilestack::io::error::{WithPath, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TileError::FileSystem {
            path: "/tmp/parts".into(),
            operation: "read directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read directory"));
        assert!(message.contains("/tmp/parts"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("columns", &0, &"at least one column is required");

        let message = error.to_string();
        assert!(message.contains("columns"));
        assert!(message.contains("'0'"));
        assert!(message.contains("at least one column"));
        assert!(error.source().is_none());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = TileError::ImageExport {
            path: PathBuf::from("/restricted/1_1_1_1_1_1.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/1_1_1_1_1_1.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests ImageHeader error names the file and keeps its source
    // Verified by dropping the source from the variant
    #[test]
    fn test_image_header_error() {
        let error = TileError::ImageHeader {
            path: PathBuf::from("parts/GR1.png"),
            source: png::DecodingError::IoError(std::io::Error::other("truncated")),
        };

        let message = error.to_string();
        assert!(message.contains("parts/GR1.png"));
        assert!(message.contains("truncated"));
        assert!(error.source().is_some());
    }

    // Tests path context is attached to raw I/O failures
    // Verified by discarding the path
    #[test]
    fn test_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::other("disk full"));
        let error = result.with_path("out/tile.png", "write").unwrap_err();
        assert!(error.to_string().contains("out/tile.png"));
    }
}
