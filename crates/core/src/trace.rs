/// A destination for diagnostic trace messages.
///
/// Solvers never write to a particular output stream. Observers that produce
/// human-readable diagnostics hand each message to a `TraceSink`, which can
/// forward it to stdout, a logger, or an in-memory buffer.
///
/// Closures taking `&str` implement `TraceSink`, and `Vec<String>` collects
/// every message it receives.
pub trait TraceSink {
    /// Emits a single diagnostic message.
    fn emit(&mut self, message: &str);
}

impl<F> TraceSink for F
where
    F: FnMut(&str),
{
    fn emit(&mut self, message: &str) {
        self(message);
    }
}

impl TraceSink for Vec<String> {
    fn emit(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_all(sink: &mut impl TraceSink, messages: &[&str]) {
        for message in messages {
            sink.emit(message);
        }
    }

    #[test]
    fn vec_collects_messages_in_order() {
        let mut sink = Vec::new();
        emit_all(&mut sink, &["first", "second"]);

        assert_eq!(sink, vec!["first".to_owned(), "second".to_owned()]);
    }

    #[test]
    fn closure_receives_messages() {
        let mut total_len = 0;
        let mut sink = |message: &str| total_len += message.len();
        emit_all(&mut sink, &["abc", "de"]);

        assert_eq!(total_len, 5);
    }
}
