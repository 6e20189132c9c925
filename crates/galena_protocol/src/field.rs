use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldAccessError {
    #[error("packet {packet} has no field named {field:?}")]
    NoSuchField { packet: &'static str, field: String },
    #[error("packet {packet} field {field:?} holds a {expected:?}, but a {provided:?} was written")]
    TypeMismatch {
        packet: &'static str,
        field: &'static str,
        expected: FieldKind,
        provided: FieldKind,
    },
}

/// The kinds of value a legacy packet field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    ByteArray,
    IntArray,
    StringArray,
}

/// A packet field value with its concrete type erased.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<u8>),
    IntArray(Vec<i32>),
    StringArray(Vec<String>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Byte(_) => FieldKind::Byte,
            FieldValue::Short(_) => FieldKind::Short,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Long(_) => FieldKind::Long,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Double(_) => FieldKind::Double,
            FieldValue::String(_) => FieldKind::String,
            FieldValue::ByteArray(_) => FieldKind::ByteArray,
            FieldValue::IntArray(_) => FieldKind::IntArray,
            FieldValue::StringArray(_) => FieldKind::StringArray,
        }
    }
}

/// Conversion between a concrete field type and its erased [`FieldValue`],
/// used by the dispatch that `packet_fields!` generates.
///
/// `from_value` hands the value back on a kind mismatch so the caller can
/// report what was actually provided.
pub trait FieldCodec: Sized {
    const KIND: FieldKind;

    fn into_value(self) -> FieldValue;
    fn from_value(value: FieldValue) -> Result<Self, FieldValue>;
}

macro_rules! field_codec {
    ( $( $typ:ty => $kind:ident ),* $(,)? ) => {
        $(impl FieldCodec for $typ {
            const KIND: FieldKind = FieldKind::$kind;

            fn into_value(self) -> FieldValue {
                FieldValue::$kind(self)
            }

            fn from_value(value: FieldValue) -> Result<Self, FieldValue> {
                match value {
                    FieldValue::$kind(value) => Ok(value),
                    other => Err(other),
                }
            }
        }

        impl From<$typ> for FieldValue {
            fn from(value: $typ) -> FieldValue {
                FieldValue::$kind(value)
            }
        })*
    }
}

field_codec! {
    bool => Bool,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    Vec<u8> => ByteArray,
    Vec<i32> => IntArray,
    Vec<String> => StringArray,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_report_their_kind() {
        assert_eq!(FieldValue::Bool(true).kind(), FieldKind::Bool);
        assert_eq!(FieldValue::Int(3).kind(), FieldKind::Int);
        assert_eq!(FieldValue::String("a".into()).kind(), FieldKind::String);
        assert_eq!(FieldValue::IntArray(vec![1]).kind(), FieldKind::IntArray);
    }

    #[test]
    fn codec_round_trips() {
        let value = <i32 as FieldCodec>::into_value(17);
        assert_eq!(<i32 as FieldCodec>::from_value(value), Ok(17));
    }

    #[test]
    fn codec_rejects_mismatched_kinds() {
        let rejected = <i32 as FieldCodec>::from_value(FieldValue::Long(17));
        assert_eq!(rejected, Err(FieldValue::Long(17)));
    }
}
