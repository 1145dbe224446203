//!
//! Primitive classes
//!
//! A class fixes the shape of the code, the payload length and therefore the length of the text form.
//! Decoding walks [`PrimitiveClass::ALL`] in order, so a new class only needs a new entry here.
//!

/// Size class of a primitive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveClass {
    /// Two character code (`0` followed by a selector), 64 byte payload, 88 characters of text
    Large,

    /// One character code, 32 byte payload, 44 characters of text
    Small,
}

impl PrimitiveClass {
    /// All classes in the order they are tried while decoding
    ///
    /// `Large` goes first since its leading `0` would otherwise never be reached.
    pub const ALL: [Self; 2] = [Self::Large, Self::Small];

    /// Fixed leading character of the code, if the class has one
    #[must_use]
    pub const fn selector(self) -> Option<u8> {
        match self {
            Self::Large => Some(b'0'),
            Self::Small => None,
        }
    }

    /// Characters allowed in the variable position of the code
    #[must_use]
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Large => b"BCDEFGI",
            Self::Small => b"ABCDEFGHIJOQZ",
        }
    }

    /// Length of the code in characters
    #[must_use]
    pub const fn code_len(self) -> usize {
        match self {
            Self::Large => 2,
            Self::Small => 1,
        }
    }

    /// Length of the raw payload in bytes
    #[must_use]
    pub const fn payload_len(self) -> usize {
        match self {
            Self::Large => 64,
            Self::Small => 32,
        }
    }

    /// Number of zero bytes prepended to the payload before encoding
    #[must_use]
    pub const fn pad_len(self) -> usize {
        pad_len(self.payload_len())
    }

    /// Length of the text form in characters
    #[must_use]
    pub const fn text_len(self) -> usize {
        (self.pad_len() + self.payload_len()) / 3 * 4
    }

    /// Check whether the leading characters of `input` carry a code of this class
    #[must_use]
    pub fn matches_prefix(self, input: &[u8]) -> bool {
        let variable = match self.selector() {
            Some(selector) if input.first() == Some(&selector) => input.get(1),
            Some(..) => None,
            None => input.first(),
        };

        variable.is_some_and(|digit| self.alphabet().contains(digit))
    }

    /// Class whose code is exactly `code`
    #[must_use]
    pub fn of_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| code.len() == class.code_len() && class.matches_prefix(code.as_bytes()))
    }

    /// Class of a primitive judging by its leading characters
    #[must_use]
    pub fn of_text(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.matches_prefix(text.as_bytes()))
    }
}

/// Number of zero bytes needed to align `len` to a 3 byte boundary
#[inline]
#[must_use]
pub const fn pad_len(len: usize) -> usize {
    (3 - len % 3) % 3
}
