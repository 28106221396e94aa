//! Tests for script progress tracking

#[cfg(test)]
mod tests {
    use pixedit::io::progress::ScriptProgress;

    // Tests advancing counts commands from the start position
    // Verified by skipping the increment in advance
    #[test]
    fn test_advance_counts_commands() {
        let mut progress = ScriptProgress::hidden();
        progress.start(3);

        progress.advance("blur");
        progress.advance("mosaic 5");

        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests start resets the position for a new script
    // Verified by keeping the previous position on start
    #[test]
    fn test_start_resets_position() {
        let mut progress = ScriptProgress::hidden();
        progress.start(2);
        progress.advance("undo");

        progress.start(5);

        assert_eq!(progress.position(), 0);
    }

    // Tests a drawn progress bar can be driven without a terminal
    // Verified by panicking on template errors
    #[test]
    fn test_default_progress_bar() {
        let mut progress = ScriptProgress::default();
        progress.start(1);
        progress.advance("sepia");
        progress.finish();

        assert_eq!(progress.position(), 1);
    }
}
