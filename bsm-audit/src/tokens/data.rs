/*!
 The `AUT_DATA` token: an array of fixed-width elements with a display hint.
*/

use crate::{
    error::token::TokenError,
    util::{cursor::ByteCursor, text::AuditText, writer::ByteWriter},
};

/// How the producer asked for the elements to be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintFormat {
    Binary,
    Octal,
    Decimal,
    Hex,
    /// The elements are characters of one string
    String,
    Unknown(u8),
}

impl PrintFormat {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => Self::Binary,
            1 => Self::Octal,
            2 => Self::Decimal,
            3 => Self::Hex,
            4 => Self::String,
            other => Self::Unknown(other),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Self::Binary => 0,
            Self::Octal => 1,
            Self::Decimal => 2,
            Self::Hex => 3,
            Self::String => 4,
            Self::Unknown(other) => other,
        }
    }
}

/// Width of each element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Byte,
    Short,
    Int32,
    Int64,
}

impl ElementType {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Byte),
            1 => Some(Self::Short),
            2 => Some(Self::Int32),
            3 => Some(Self::Int64),
            _ => None,
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Self::Byte => 0,
            Self::Short => 1,
            Self::Int32 => 2,
            Self::Int64 => 3,
        }
    }

    /// Size of one element in bytes
    pub fn width(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Short => 2,
            Self::Int32 => 4,
            Self::Int64 => 8,
        }
    }
}

/// Rendered contents of a data token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataValue {
    /// Elements concatenated and decoded as text
    Text(AuditText),
    /// Elements as unsigned integers
    Numbers(Vec<u64>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    pub print_format: PrintFormat,
    pub element_type: ElementType,
    /// Number of elements
    pub count: u8,
    /// The `count * width` bytes of the elements
    pub raw: Vec<u8>,
    pub value: DataValue,
}

impl Data {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, TokenError> {
        let print_format = PrintFormat::from_byte(cursor.read_u8()?);
        let element_byte = cursor.read_u8()?;
        let element_type =
            ElementType::from_byte(element_byte).ok_or(TokenError::UnknownDataType(element_byte))?;
        let count = cursor.read_u8()?;
        let raw = cursor
            .read_exact_bytes(usize::from(count) * element_type.width())?
            .to_vec();

        let value = match print_format {
            PrintFormat::String => DataValue::Text(AuditText::from_bytes(&raw)),
            _ => DataValue::Numbers(
                raw.chunks_exact(element_type.width())
                    .map(|chunk| {
                        chunk
                            .iter()
                            .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
                    })
                    .collect(),
            ),
        };

        Ok(Self {
            print_format,
            element_type,
            count,
            raw,
            value,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer
            .u8(self.print_format.to_byte())
            .u8(self.element_type.to_byte())
            .u8(self.count)
            .bytes(&self.raw);
    }

    /// Render the elements using the requested print format
    pub fn display(&self) -> String {
        match &self.value {
            DataValue::Text(text) => text.value.clone(),
            DataValue::Numbers(numbers) => numbers
                .iter()
                .map(|number| match self.print_format {
                    PrintFormat::Binary => format!("{number:#b}"),
                    PrintFormat::Octal => format!("{number:#o}"),
                    PrintFormat::Decimal => format!("{number}"),
                    _ => format!("{number:#x}"),
                })
                .collect::<Vec<String>>()
                .join(" "),
        }
    }
}
