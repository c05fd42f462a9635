//! # Traits
//!
//! `Numeric` is implemented for every primitive number type that can be written in an
//! inline `DataItem` payload. Besides rendering a value as text, each type reports the
//! `NumberType` and `Precision` that describe it in XDMF terms, which lets
//! [`write_data_item`](crate::XdmfDocument::write_data_item) fill in those attributes
//! without being told.

use crate::catalog::{NumberType, Precision};

pub trait Numeric: Copy + num_traits::Num {
    const NUMBER_TYPE: NumberType;
    const PRECISION: Precision;

    /// append the textual form of the value to `out`
    fn write_text(self, out: &mut String);
}

macro_rules! float_numeric {
    ($t:ty, $precision:expr) => {
        impl Numeric for $t {
            const NUMBER_TYPE: NumberType = NumberType::Float;
            const PRECISION: Precision = $precision;

            fn write_text(self, out: &mut String) {
                let mut buffer = ryu::Buffer::new();
                out.push_str(buffer.format(self));
            }
        }
    };
}

macro_rules! integer_numeric {
    ($t:ty, $number_type:expr, $precision:expr) => {
        impl Numeric for $t {
            const NUMBER_TYPE: NumberType = $number_type;
            const PRECISION: Precision = $precision;

            fn write_text(self, out: &mut String) {
                out.push_str(&self.to_string());
            }
        }
    };
}

float_numeric!(f32, Precision::Bytes4);
float_numeric!(f64, Precision::Bytes8);

integer_numeric!(i8, NumberType::Char, Precision::Bytes1);
integer_numeric!(u8, NumberType::UChar, Precision::Bytes1);
integer_numeric!(i16, NumberType::Int, Precision::Bytes2);
integer_numeric!(u16, NumberType::UInt, Precision::Bytes2);
integer_numeric!(i32, NumberType::Int, Precision::Bytes4);
integer_numeric!(u32, NumberType::UInt, Precision::Bytes4);
integer_numeric!(i64, NumberType::Int, Precision::Bytes8);
integer_numeric!(u64, NumberType::UInt, Precision::Bytes8);
