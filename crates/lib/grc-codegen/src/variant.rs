use std::fmt;

/// The component styles that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Class component with props and state.
    Basic,
    /// Class component wrapped in a redux `connect` call.
    Redux,
    /// Function component.
    Stateless,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Basic, Variant::Redux, Variant::Stateless];

    /// Tag a template must carry to be selected for this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Variant::Basic => "basic-comp",
            Variant::Redux => "redux-comp",
            Variant::Stateless => "stateless",
        }
    }

    /// Identifier of the host command bound to this variant.
    pub fn command_id(&self) -> &'static str {
        match self {
            Variant::Basic => "grc.basicComponent",
            Variant::Redux => "grc.reduxComponent",
            Variant::Stateless => "grc.stateLessComponent",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.tag() == tag)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
