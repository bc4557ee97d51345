//! Tests for tile set conventions and defaults

#[cfg(test)]
mod tests {
    use tilestack::io::configuration::{
        BUCKET_COUNTER_WIDTH, DEFAULT_IMAGES_PER_ROW, DEFAULT_MERGE_OUTPUT, OUTPUT_EXTENSION,
        PART_EXTENSIONS, PREFIX_LEN, SHEET_EXTENSIONS, SLOT_COUNT, has_extension,
    };

    // Tests tile layering constants
    // Verified by changing slot count
    #[test]
    fn test_slot_conventions() {
        assert_eq!(SLOT_COUNT, 6);
        assert_eq!(PREFIX_LEN, 2);
        assert_eq!(BUCKET_COUNTER_WIDTH, 4);
    }

    // Tests default sheet width
    // Verified by changing the default column count
    #[test]
    fn test_default_images_per_row() {
        assert_eq!(DEFAULT_IMAGES_PER_ROW, 20);
    }

    // Tests outputs are PNG
    // Verified by switching output extension
    #[test]
    fn test_output_is_png() {
        assert_eq!(OUTPUT_EXTENSION, "png");
        assert!(has_extension(DEFAULT_MERGE_OUTPUT, &[OUTPUT_EXTENSION]));
        assert!(PART_EXTENSIONS.contains(&"png"));
    }

    // Tests extension matching ignores case and needs a real extension
    // Verified by matching on name suffix instead of extension
    #[test]
    fn test_has_extension() {
        assert!(has_extension("tile.PNG", PART_EXTENSIONS));
        assert!(has_extension("photo.Jpeg", SHEET_EXTENSIONS));
        assert!(has_extension("anim.gif", SHEET_EXTENSIONS));
        assert!(!has_extension("anim.gif", PART_EXTENSIONS));
        assert!(!has_extension("png", PART_EXTENSIONS));
        assert!(!has_extension("tile.png.bak", PART_EXTENSIONS));
    }
}
