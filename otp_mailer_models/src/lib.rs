use std::ops::Deref;

use serde::{Deserialize, Serialize};

pub mod otp;

/// Wrapper for values that must never show up in logs.
///
/// The `Debug` implementation prints a placeholder instead of the wrapped
/// value. Use [`Deref`] or the public field to access the value itself.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sensitive<T>(pub T);

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[sensitive]")
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Sensitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_value() {
        let secret = Sensitive::from("123456".to_owned());
        let debug = format!("{secret:?} {:?}", Some(&secret));
        assert!(!debug.contains("123456"));
        assert_eq!(*secret, "123456");
    }
}
