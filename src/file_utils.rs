use std::path::{Path, PathBuf};

// @module: File and path utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @generates: Output path for translated subtitle
    // @params: input_file, output_dir, target_language, extension
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        target_language: &str,
        extension: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(target_language);
        output_filename.push('.');
        output_filename.push_str(extension);

        output_dir.join(output_filename)
    }

    // @generates: `<stem>.<language>.srt` next to the input file
    pub fn sibling_output_path<P: AsRef<Path>>(input_file: P, target_language: &str) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = input_file.parent().unwrap_or(Path::new(""));
        Self::generate_output_path(
            input_file,
            output_dir,
            target_language,
            crate::subtitle_processor::SUBTITLE_EXTENSION,
        )
    }

    // @checks: Value can be embedded in a file name as-is
    pub fn is_valid_filename_component(value: &str) -> bool {
        !value.trim().is_empty()
            && value != "."
            && value != ".."
            && !value.chars().any(|c| matches!(c, '/' | '\\' | '\0'))
    }
}
