//! Node kind taxonomy.
//!
//! A node is exactly one of three things: a single-byte [`Delimiter`], an
//! [`OriginField`] of an absolute URL, or a [`StructuralToken`] carrying
//! template or instance content. The declared [`ContentType`] is kept in a
//! separate enum so that a kind can never be confused with a type.

use std::fmt;

use bitflags::bitflags;

/// Single-byte grammar delimiters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Delimiter {
    /// `/`
    Slash = b'/',
    /// `:`
    Colon = b':',
    /// `?`
    Question = b'?',
    /// `&`
    Ampersand = b'&',
    /// `;`
    Semicolon = b';',
    /// `#`
    Hash = b'#',
    /// `*`
    Asterisk = b'*',
    /// `[`
    OpenBracket = b'[',
    /// `]`
    CloseBracket = b']',
    /// `=`
    Equal = b'=',
}

impl Delimiter {
    /// All delimiters.
    pub const ALL: [Delimiter; 10] = [
        Delimiter::Slash,
        Delimiter::Colon,
        Delimiter::Question,
        Delimiter::Ampersand,
        Delimiter::Semicolon,
        Delimiter::Hash,
        Delimiter::Asterisk,
        Delimiter::OpenBracket,
        Delimiter::CloseBracket,
        Delimiter::Equal,
    ];

    /// The delimiter's source byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Map a source byte to its delimiter, if it is one.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            b'/' => Delimiter::Slash,
            b':' => Delimiter::Colon,
            b'?' => Delimiter::Question,
            b'&' => Delimiter::Ampersand,
            b';' => Delimiter::Semicolon,
            b'#' => Delimiter::Hash,
            b'*' => Delimiter::Asterisk,
            b'[' => Delimiter::OpenBracket,
            b']' => Delimiter::CloseBracket,
            b'=' => Delimiter::Equal,
            _ => return None,
        })
    }

    /// Query separators: `?`, `&` and `;`.
    #[inline]
    pub const fn is_query_separator(self) -> bool {
        matches!(
            self,
            Delimiter::Question | Delimiter::Ampersand | Delimiter::Semicolon
        )
    }

    /// Delimiters that end the path: query separators and `#`.
    #[inline]
    pub const fn ends_path(self) -> bool {
        self.is_query_separator() || matches!(self, Delimiter::Hash)
    }
}

/// Components of an absolute URL's origin.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum OriginField {
    Protocol,
    Hostname,
    Port,
}

/// Content-carrying tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum StructuralToken {
    /// Static path segment (template) or concrete segment (instance).
    Path,
    /// Name after `:` in a path.
    Variable,
    /// Query parameter name.
    Parameter,
    /// Text after `=`.
    Value,
    /// Text after `#`.
    Fragment,
    /// Name inside `[...]`.
    Slug,
    /// The `...` marker of a catch-all segment.
    Ellipsis,
}

/// Kind of a node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Delimiter(Delimiter),
    Origin(OriginField),
    Token(StructuralToken),
}

impl NodeKind {
    pub const SLASH: NodeKind = NodeKind::Delimiter(Delimiter::Slash);
    pub const COLON: NodeKind = NodeKind::Delimiter(Delimiter::Colon);
    pub const EQUAL: NodeKind = NodeKind::Delimiter(Delimiter::Equal);
    pub const PATH: NodeKind = NodeKind::Token(StructuralToken::Path);
    pub const VARIABLE: NodeKind = NodeKind::Token(StructuralToken::Variable);
    pub const PARAMETER: NodeKind = NodeKind::Token(StructuralToken::Parameter);
    pub const VALUE: NodeKind = NodeKind::Token(StructuralToken::Value);
    pub const FRAGMENT: NodeKind = NodeKind::Token(StructuralToken::Fragment);
    pub const SLUG: NodeKind = NodeKind::Token(StructuralToken::Slug);
    pub const ELLIPSIS: NodeKind = NodeKind::Token(StructuralToken::Ellipsis);
    pub const PROTOCOL: NodeKind = NodeKind::Origin(OriginField::Protocol);
    pub const HOSTNAME: NodeKind = NodeKind::Origin(OriginField::Hostname);
    pub const PORT: NodeKind = NodeKind::Origin(OriginField::Port);

    /// Wire byte for this kind.
    ///
    /// Delimiters use their ASCII value; everything else lives in the
    /// 242..=255 range, which no delimiter occupies.
    pub const fn to_byte(self) -> u8 {
        match self {
            NodeKind::Delimiter(d) => d.byte(),
            NodeKind::Origin(OriginField::Port) => 244,
            NodeKind::Origin(OriginField::Hostname) => 245,
            NodeKind::Origin(OriginField::Protocol) => 246,
            NodeKind::Token(StructuralToken::Ellipsis) => 242,
            NodeKind::Token(StructuralToken::Slug) => 243,
            NodeKind::Token(StructuralToken::Path) => 251,
            NodeKind::Token(StructuralToken::Variable) => 252,
            NodeKind::Token(StructuralToken::Fragment) => 253,
            NodeKind::Token(StructuralToken::Parameter) => 254,
            NodeKind::Token(StructuralToken::Value) => 255,
        }
    }

    /// Inverse of [`NodeKind::to_byte`].
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            244 => NodeKind::PORT,
            245 => NodeKind::HOSTNAME,
            246 => NodeKind::PROTOCOL,
            242 => NodeKind::ELLIPSIS,
            243 => NodeKind::SLUG,
            251 => NodeKind::PATH,
            252 => NodeKind::VARIABLE,
            253 => NodeKind::FRAGMENT,
            254 => NodeKind::PARAMETER,
            255 => NodeKind::VALUE,
            _ => match Delimiter::from_byte(byte) {
                Some(d) => NodeKind::Delimiter(d),
                None => return None,
            },
        })
    }

    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(self, NodeKind::Delimiter(_))
    }

    #[inline]
    pub const fn as_delimiter(self) -> Option<Delimiter> {
        match self {
            NodeKind::Delimiter(d) => Some(d),
            _ => None,
        }
    }

    /// The [`KindSet`] flag for this kind. Delimiters have none.
    pub const fn flag(self) -> KindSet {
        match self {
            NodeKind::Delimiter(_) => KindSet::empty(),
            NodeKind::Origin(OriginField::Protocol) => KindSet::PROTOCOL,
            NodeKind::Origin(OriginField::Hostname) => KindSet::HOSTNAME,
            NodeKind::Origin(OriginField::Port) => KindSet::PORT,
            NodeKind::Token(StructuralToken::Path) => KindSet::PATH,
            NodeKind::Token(StructuralToken::Variable) => KindSet::VARIABLE,
            NodeKind::Token(StructuralToken::Parameter) => KindSet::PARAMETER,
            NodeKind::Token(StructuralToken::Value) => KindSet::VALUE,
            NodeKind::Token(StructuralToken::Fragment) => KindSet::FRAGMENT,
            NodeKind::Token(StructuralToken::Slug) => KindSet::SLUG,
            NodeKind::Token(StructuralToken::Ellipsis) => KindSet::ELLIPSIS,
        }
    }

    /// Short display name, as printed in node tables.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Delimiter(_) => "Delimiter",
            NodeKind::Origin(OriginField::Protocol) => "Protocol",
            NodeKind::Origin(OriginField::Hostname) => "Hostname",
            NodeKind::Origin(OriginField::Port) => "Port",
            NodeKind::Token(StructuralToken::Path) => "Path",
            NodeKind::Token(StructuralToken::Variable) => "Variable",
            NodeKind::Token(StructuralToken::Parameter) => "Parameter",
            NodeKind::Token(StructuralToken::Value) => "Value",
            NodeKind::Token(StructuralToken::Fragment) => "Fragment",
            NodeKind::Token(StructuralToken::Slug) => "Slug",
            NodeKind::Token(StructuralToken::Ellipsis) => "Ellipsis",
        }
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Delimiter(d) => write!(f, "Delimiter({:?})", char::from(d.byte())),
            _ => f.write_str(self.name()),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared content type of a Parameter or Value node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentType {
    #[default]
    None,
    String,
    Number,
    Boolean,
    Array,
}

impl ContentType {
    /// Match a type literal (`number`, `boolean`, `string`, `array`).
    ///
    /// Matching is exact and case-sensitive.
    pub fn from_literal(text: &str) -> Option<Self> {
        match text {
            "string" => Some(ContentType::String),
            "number" => Some(ContentType::Number),
            "boolean" => Some(ContentType::Boolean),
            "array" => Some(ContentType::Array),
            _ => None,
        }
    }

    /// Wire byte for this type.
    pub const fn to_byte(self) -> u8 {
        match self {
            ContentType::None => 0,
            ContentType::Boolean => 247,
            ContentType::String => 248,
            ContentType::Number => 249,
            ContentType::Array => 250,
        }
    }

    /// Inverse of [`ContentType::to_byte`].
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(ContentType::None),
            247 => Some(ContentType::Boolean),
            248 => Some(ContentType::String),
            249 => Some(ContentType::Number),
            250 => Some(ContentType::Array),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ContentType::None => "none",
            ContentType::String => "string",
            ContentType::Number => "number",
            ContentType::Boolean => "boolean",
            ContentType::Array => "array",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Set of content and origin kinds present in a node sequence.
    ///
    /// Filled while nodes are pushed, so accessors can skip a scan of the
    /// arena when the kind they look for never occurred.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct KindSet: u16 {
        // === Structural tokens ===
        const PATH = 1 << 0;
        const VARIABLE = 1 << 1;
        const PARAMETER = 1 << 2;
        const VALUE = 1 << 3;
        const FRAGMENT = 1 << 4;
        const SLUG = 1 << 5;
        const ELLIPSIS = 1 << 6;

        // === Origin ===
        const PROTOCOL = 1 << 8;
        const HOSTNAME = 1 << 9;
        const PORT = 1 << 10;
    }
}

impl KindSet {
    /// Any origin component.
    pub const ORIGIN: Self = Self::PROTOCOL.union(Self::HOSTNAME).union(Self::PORT);

    /// Bracket-style dynamic segments.
    #[inline]
    pub const fn has_brackets(self) -> bool {
        self.intersects(Self::SLUG.union(Self::ELLIPSIS))
    }
}
