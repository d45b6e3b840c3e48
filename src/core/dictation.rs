//! Dictation into a chapter at a cursor position
//!
//! Speech recognition itself is a host capability behind a trait; the session
//! logic that commits finalized segments into chapter text is platform-free
//! and tested with a scripted recognizer.

use thiserror::Error;

use crate::entities::Chapter;

/// One recognizer result
#[derive(Debug, Clone)]
pub struct TranscriptSegment {
    pub text: String,
    /// Interim segments may be revised; only final segments are committed
    pub is_final: bool,
}

/// A source of transcript segments
pub trait SpeechRecognizer {
    fn start(&mut self) -> Result<(), DictationError>;
    /// Next segment, or None when the stream has ended
    fn poll(&mut self) -> Option<TranscriptSegment>;
    fn stop(&mut self);
}

#[derive(Debug, Error)]
pub enum DictationError {
    #[error("speech recognition is not available on this host")]
    Unsupported,
}

/// Build the host recognizer
///
/// No backend is wired up yet; callers get a clean unsupported error rather
/// than a panic.
pub fn host_recognizer() -> Result<Box<dyn SpeechRecognizer>, DictationError> {
    Err(DictationError::Unsupported)
}

/// An in-progress dictation into one chapter
///
/// Final segments are inserted at the cursor followed by a single space, and
/// the cursor advances past the inserted text. Interim segments are held for
/// display only and never touch the chapter.
#[derive(Debug)]
pub struct DictationSession {
    cursor: usize,
    interim: String,
}

impl DictationSession {
    /// Start a session with the cursor at a character position (clamped on
    /// first commit)
    pub fn new(cursor: usize) -> Self {
        Self {
            cursor,
            interim: String::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The interim text to display alongside the committed content
    pub fn interim(&self) -> &str {
        &self.interim
    }

    /// Feed one segment; final segments mutate the chapter
    pub fn accept(&mut self, chapter: &mut Chapter, segment: TranscriptSegment) {
        if segment.is_final {
            let inserted = format!("{} ", segment.text);
            self.cursor = chapter.insert_at(self.cursor, &inserted);
            self.interim.clear();
        } else {
            self.interim = segment.text;
        }
    }

    /// Drain a recognizer until its stream ends
    pub fn run(
        &mut self,
        chapter: &mut Chapter,
        recognizer: &mut dyn SpeechRecognizer,
    ) -> Result<(), DictationError> {
        recognizer.start()?;
        while let Some(segment) = recognizer.poll() {
            self.accept(chapter, segment);
        }
        recognizer.stop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        segments: std::vec::IntoIter<TranscriptSegment>,
    }

    impl Scripted {
        fn new(segments: Vec<TranscriptSegment>) -> Self {
            Self {
                segments: segments.into_iter(),
            }
        }
    }

    impl SpeechRecognizer for Scripted {
        fn start(&mut self) -> Result<(), DictationError> {
            Ok(())
        }
        fn poll(&mut self) -> Option<TranscriptSegment> {
            self.segments.next()
        }
        fn stop(&mut self) {}
    }

    fn seg(text: &str, is_final: bool) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            is_final,
        }
    }

    #[test]
    fn test_final_segments_commit_at_cursor_with_space() {
        let mut chapter = Chapter::new("X");
        chapter.content = "start end".to_string();
        let mut session = DictationSession::new(6);
        session.accept(&mut chapter, seg("middle", true));
        assert_eq!(chapter.content, "start middle end");
        assert_eq!(session.cursor(), 13);
    }

    #[test]
    fn test_interim_segments_do_not_touch_chapter() {
        let mut chapter = Chapter::new("X");
        let mut session = DictationSession::new(0);
        session.accept(&mut chapter, seg("maybe", false));
        assert!(chapter.content.is_empty());
        assert_eq!(session.interim(), "maybe");
    }

    #[test]
    fn test_final_commit_clears_interim() {
        let mut chapter = Chapter::new("X");
        let mut session = DictationSession::new(0);
        session.accept(&mut chapter, seg("may", false));
        session.accept(&mut chapter, seg("maybe so", true));
        assert_eq!(chapter.content, "maybe so ");
        assert!(session.interim().is_empty());
    }

    #[test]
    fn test_run_drains_scripted_recognizer() {
        let mut chapter = Chapter::new("X");
        let mut recognizer = Scripted::new(vec![
            seg("first", true),
            seg("sec", false),
            seg("second", true),
        ]);
        let mut session = DictationSession::new(0);
        session.run(&mut chapter, &mut recognizer).unwrap();
        assert_eq!(chapter.content, "first second ");
    }

    #[test]
    fn test_host_recognizer_is_unsupported() {
        assert!(matches!(host_recognizer(), Err(DictationError::Unsupported)));
    }
}
