//! Class-name inputs.
//!
//! `ClassInput` is the argument type of the merger: a class string, a
//! falsy placeholder, or a nested list of inputs.

/// One argument passed to the merger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassInput {
    /// Contributes nothing (`false`, `None`, `""`, `0`).
    #[default]
    Falsy,
    /// One or more whitespace-separated class names.
    Text(String),
    /// Nested inputs, flattened in order.
    List(Vec<ClassInput>),
}

impl ClassInput {
    /// Input that contributes `class` only when `enabled` is true.
    pub fn when(enabled: bool, class: impl Into<String>) -> Self {
        if enabled {
            let class: String = class.into();
            Self::from(class)
        } else {
            Self::Falsy
        }
    }

    /// Whether the input contributes no tokens at all.
    pub fn is_falsy(&self) -> bool {
        match self {
            ClassInput::Falsy => true,
            ClassInput::Text(text) => text.trim().is_empty(),
            ClassInput::List(items) => items.iter().all(ClassInput::is_falsy),
        }
    }

    /// Flatten into whitespace-separated tokens, preserving order.
    pub fn tokens(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out
    }

    pub(crate) fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassInput::Falsy => {}
            ClassInput::Text(text) => out.extend(text.split_whitespace()),
            ClassInput::List(items) => {
                for item in items {
                    item.collect_tokens(out);
                }
            }
        }
    }
}

impl From<&str> for ClassInput {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            ClassInput::Falsy
        } else {
            ClassInput::Text(value.to_string())
        }
    }
}

impl From<String> for ClassInput {
    fn from(value: String) -> Self {
        if value.is_empty() {
            ClassInput::Falsy
        } else {
            ClassInput::Text(value)
        }
    }
}

impl From<&String> for ClassInput {
    fn from(value: &String) -> Self {
        ClassInput::from(value.as_str())
    }
}

/// Booleans never contribute a class; `true` alone has no name to add.
impl From<bool> for ClassInput {
    fn from(_: bool) -> Self {
        ClassInput::Falsy
    }
}

impl From<()> for ClassInput {
    fn from(_: ()) -> Self {
        ClassInput::Falsy
    }
}

impl<T: Into<ClassInput>> From<Option<T>> for ClassInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassInput::Falsy, Into::into)
    }
}

impl<T: Into<ClassInput>> From<Vec<T>> for ClassInput {
    fn from(value: Vec<T>) -> Self {
        ClassInput::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassInput>, const N: usize> From<[T; N]> for ClassInput {
    fn from(value: [T; N]) -> Self {
        ClassInput::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassInput> + Clone> From<&[T]> for ClassInput {
    fn from(value: &[T]) -> Self {
        ClassInput::List(value.iter().cloned().map(Into::into).collect())
    }
}

/// `(name, enabled)` toggles a class on a condition.
impl<S: Into<String>> From<(S, bool)> for ClassInput {
    fn from((class, enabled): (S, bool)) -> Self {
        ClassInput::when(enabled, class)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            /// Zero is falsy; other numbers contribute their decimal text.
            impl From<$ty> for ClassInput {
                fn from(value: $ty) -> Self {
                    if value == 0 {
                        ClassInput::Falsy
                    } else {
                        ClassInput::Text(value.to_string())
                    }
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);
