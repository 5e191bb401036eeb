//! Helpers for rendering error chains to users.

mod private {
    use eyre::Chain;
    use std::error::Error;

    pub trait ErrorChain {
        fn chain(&self) -> Chain<'_>;
    }

    impl ErrorChain for dyn Error + 'static {
        fn chain(&self) -> Chain<'_> {
            Chain::new(self)
        }
    }

    impl ErrorChain for eyre::Report {
        fn chain(&self) -> Chain<'_> {
            self.chain()
        }
    }
}

/// Displays a chain of errors in a single line, joined by `"; "`.
pub fn display_chain<E: private::ErrorChain + ?Sized>(error: &E) -> String {
    dedup_chain(error).join("; ")
}

/// Collects the messages of an error chain, dropping causes already contained in the message
/// of the error they caused (`"call failed: reverted"; "reverted"` -> `"call failed: reverted"`).
pub fn dedup_chain<E: private::ErrorChain + ?Sized>(error: &E) -> Vec<String> {
    let mut causes: Vec<String> =
        error.chain().map(|cause| cause.to_string().trim().to_string()).collect();
    causes.dedup_by(|cause, outer| outer.contains(cause.as_str()));
    causes
}
