//! Per-edge content transforms

/// Derives a child's contents from its parent's
///
/// Called once per parent-to-child edge. Implementations should be pure:
/// the same input must always produce the same output, otherwise two trees
/// generated from the same root will differ.
///
/// Any `Fn(&C) -> C` closure implements this trait.
pub trait ContentUpdate<C> {
    /// Compute the contents of a child from its parent's contents
    fn update(&self, contents: &C) -> C;
}

impl<C, F> ContentUpdate<C> for F
where
    F: Fn(&C) -> C,
{
    fn update(&self, contents: &C) -> C {
        self(contents)
    }
}

/// The default update: every child gets a clone of its parent's contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<C: Clone> ContentUpdate<C> for Identity {
    fn update(&self, contents: &C) -> C {
        contents.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Identity.update(&42), 42);
        assert_eq!(Identity.update(&String::from("R")), "R");
    }

    #[test]
    fn test_closure() {
        let double = |n: &i32| n * 2;
        assert_eq!(double.update(&21), 42);

        let suffix = |s: &String| format!("{s}.child");
        assert_eq!(suffix.update(&String::from("root")), "root.child");
    }
}
