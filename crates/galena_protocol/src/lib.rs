use std::fmt::Debug;

pub mod field;
pub mod legacy;
pub mod packets;

use crate::field::{FieldAccessError, FieldKind, FieldValue};

pub trait IdentifiedPacket<I: Debug>: Debug {
    const ID: I;

    fn get_packet_id(&self) -> I;
    fn get_packet_id_as_u8(&self) -> u8;
}

/// Named field access on a packet without static knowledge of its shape.
///
/// Implemented for every packet struct by `packet_fields!`, which turns the
/// field list into a dispatch over field names at compile time.
pub trait FieldAccess {
    fn fields(&self) -> &'static [(&'static str, FieldKind)];
    fn read_field(&self, name: &str) -> Result<FieldValue, FieldAccessError>;
    fn write_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldAccessError>;
}

macro_rules! packet_fields {
    { $(#[$attr:meta])* pub struct $name:ident { $( pub $field:ident: $typ:ty ),* $(,)? } } => {
        $(#[$attr])*
        #[derive(Debug, Default, Clone, PartialEq)]
        pub struct $name {
            $( pub $field: $typ, )*
        }

        impl $name {
            pub const FIELDS: &'static [(&'static str, $crate::field::FieldKind)] = &[
                $( (stringify!($field), <$typ as $crate::field::FieldCodec>::KIND), )*
            ];
        }

        impl $crate::FieldAccess for $name {
            fn fields(&self) -> &'static [(&'static str, $crate::field::FieldKind)] {
                Self::FIELDS
            }

            fn read_field(
                &self,
                name: &str,
            ) -> Result<$crate::field::FieldValue, $crate::field::FieldAccessError> {
                $(
                    if name == stringify!($field) {
                        return Ok($crate::field::FieldCodec::into_value(self.$field.clone()));
                    }
                )*
                Err($crate::field::FieldAccessError::NoSuchField {
                    packet: stringify!($name),
                    field: name.into(),
                })
            }

            fn write_field(
                &mut self,
                name: &str,
                value: $crate::field::FieldValue,
            ) -> Result<(), $crate::field::FieldAccessError> {
                $(
                    if name == stringify!($field) {
                        return match <$typ as $crate::field::FieldCodec>::from_value(value) {
                            Ok(value) => {
                                self.$field = value;
                                Ok(())
                            }
                            Err(value) => Err($crate::field::FieldAccessError::TypeMismatch {
                                packet: stringify!($name),
                                field: stringify!($field),
                                expected: <$typ as $crate::field::FieldCodec>::KIND,
                                provided: value.kind(),
                            }),
                        };
                    }
                )*
                Err($crate::field::FieldAccessError::NoSuchField {
                    packet: stringify!($name),
                    field: name.into(),
                })
            }
        }
    }
}

macro_rules! register_packets {
    { $type_enum:ident, $packet_enum:ident, $( $packet:ident($id:literal, $legacy:literal) ),* $(,)? } => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
        #[repr(u8)]
        pub enum $type_enum {
            $( $packet = $id, )*
        }

        impl $type_enum {
            /// Every registered packet type, in id order.
            pub const ALL: &'static [$type_enum] = &[ $( $type_enum::$packet, )* ];

            pub fn from_id(id: u8) -> Result<$type_enum, UnknownPacketType> {
                $type_enum::try_from(id).map_err(|_| UnknownPacketType(id))
            }

            pub fn id(self) -> u8 {
                self as u8
            }

            /// The upstream class name this packet had in the vanilla 1.4.x
            /// server, digits embedding the wire id.
            pub fn legacy_name(self) -> &'static str {
                match self {
                    $( $type_enum::$packet => $legacy, )*
                }
            }

            /// Default-constructs a packet of this type. Every call returns a
            /// fresh value; instances are never shared.
            pub fn new_packet(self) -> $packet_enum {
                match self {
                    $( $type_enum::$packet => $packet_enum::$packet(<$packet>::default()), )*
                }
            }
        }

        #[derive(Debug, Clone, PartialEq)]
        pub enum $packet_enum {
            $( $packet($packet), )*
        }

        impl $packet_enum {
            pub fn from_id(id: u8) -> Result<$packet_enum, UnknownPacketType> {
                Ok($type_enum::from_id(id)?.new_packet())
            }

            pub fn packet_type(&self) -> $type_enum {
                match self {
                    $( $packet_enum::$packet(_) => $type_enum::$packet, )*
                }
            }

            pub fn fields(&self) -> &'static [(&'static str, $crate::field::FieldKind)] {
                match self {
                    $( $packet_enum::$packet(packet) => $crate::FieldAccess::fields(packet), )*
                }
            }

            pub fn read_field(
                &self,
                name: &str,
            ) -> Result<$crate::field::FieldValue, $crate::field::FieldAccessError> {
                match self {
                    $( $packet_enum::$packet(packet) => {
                        $crate::FieldAccess::read_field(packet, name)
                    } )*
                }
            }

            pub fn write_field(
                &mut self,
                name: &str,
                value: $crate::field::FieldValue,
            ) -> Result<(), $crate::field::FieldAccessError> {
                match self {
                    $( $packet_enum::$packet(packet) => {
                        $crate::FieldAccess::write_field(packet, name, value)
                    } )*
                }
            }
        }

        $(impl $crate::IdentifiedPacket<$type_enum> for $packet {
            const ID: $type_enum = $type_enum::$packet;

            fn get_packet_id(&self) -> $type_enum {
                Self::ID
            }
            fn get_packet_id_as_u8(&self) -> u8 {
                Self::ID as u8
            }
        })*

        $(impl From<$packet> for $packet_enum {
            fn from(packet: $packet) -> $packet_enum {
                $packet_enum::$packet(packet)
            }
        })*

        $(impl TryFrom<$packet_enum> for $packet {
            type Error = $packet_enum;

            fn try_from(packet: $packet_enum) -> Result<$packet, $packet_enum> {
                match packet {
                    $packet_enum::$packet(packet) => Ok(packet),
                    other => Err(other),
                }
            }
        })*
    }
}

pub(crate) use packet_fields;
pub(crate) use register_packets;
