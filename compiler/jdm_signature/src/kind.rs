//! Primitive kinds and reference forms.
//!
//! Both are closed sets with a one-byte code in the encoding.

/// One of the nine primitive types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Every primitive kind, in code order `V Z B C S I J F D`.
    pub const ALL: [PrimitiveKind; 9] = [
        Self::Void,
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    /// The single-letter code used in the encoding.
    pub const fn code(self) -> u8 {
        match self {
            Self::Void => b'V',
            Self::Boolean => b'Z',
            Self::Byte => b'B',
            Self::Char => b'C',
            Self::Short => b'S',
            Self::Int => b'I',
            Self::Long => b'J',
            Self::Float => b'F',
            Self::Double => b'D',
        }
    }

    /// Look up the kind for an encoding letter.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            b'V' => Self::Void,
            b'Z' => Self::Boolean,
            b'B' => Self::Byte,
            b'C' => Self::Char,
            b'S' => Self::Short,
            b'I' => Self::Int,
            b'J' => Self::Long,
            b'F' => Self::Float,
            b'D' => Self::Double,
            _ => return None,
        })
    }

    /// Source keyword, as shown in display forms.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

/// How a reference type's name was obtained.
///
/// `Source` names are written as they appear in source and have not been
/// resolved (`QString;`). `Binary` names are fully resolved
/// (`Ljava/lang/String;`). The codec accepts and preserves both; which one
/// a store emits is up to the store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceForm {
    Source,
    Binary,
}

impl ReferenceForm {
    /// Leading marker byte: `Q` or `L`.
    pub const fn marker(self) -> u8 {
        match self {
            Self::Source => b'Q',
            Self::Binary => b'L',
        }
    }

    pub const fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'Q' => Some(Self::Source),
            b'L' => Some(Self::Binary),
            _ => None,
        }
    }
}
