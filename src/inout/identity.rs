//! Identifier, title and abstract shared by every input and output.

/// Descriptive attributes of an input or output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub identifier: String,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
}

impl Identity {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: None,
            abstract_text: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }
}

impl From<&str> for Identity {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

impl From<String> for Identity {
    fn from(identifier: String) -> Self {
        Self::new(identifier)
    }
}

/// Access to the [`Identity`] of a described input or output.
pub trait Described {
    fn identity(&self) -> &Identity;

    fn identifier(&self) -> &str {
        &self.identity().identifier
    }

    fn title(&self) -> Option<&str> {
        self.identity().title.as_deref()
    }

    fn abstract_text(&self) -> Option<&str> {
        self.identity().abstract_text.as_deref()
    }
}

macro_rules! impl_described {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::inout::Described for $ty {
                fn identity(&self) -> &$crate::inout::Identity {
                    &self.identity
                }
            }
        )+
    };
}

pub(crate) use impl_described;
