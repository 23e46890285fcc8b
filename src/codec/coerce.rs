//! Приведение тегов к значениям Rust.
//!
//! Числовые виды приводятся друг к другу с обёрткой (`as`), строка
//! разбирается как десятичное число, контейнеры приводятся только к
//! `bool` и к строковому представлению. Строковое представление любого
//! тега даёт `Display`.

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use super::{NbtString, Tag};
use crate::error::CoerceError;

/// Разбирает строку как машинное целое (i64).
///
/// Узкие знаковые цели получают результат с обёрткой.
fn parse_wrapping(
    s: &NbtString,
    to: &'static str,
) -> Result<i64, CoerceError> {
    parse_exact::<i64>(s, to)
}

/// Разбирает строку сразу в целевой тип с проверкой диапазона.
fn parse_exact<T>(
    s: &NbtString,
    to: &'static str,
) -> Result<T, CoerceError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let text = s
        .as_str()
        .map_err(|e| CoerceError::parse_failure(to, s.to_string_lossy(), e))?;
    text.parse::<T>()
        .map_err(|e| CoerceError::parse_failure(to, text, e))
}

fn rune_from(
    code: i32,
    from: &'static str,
) -> Result<char, CoerceError> {
    char::from_u32(code as u32).ok_or_else(|| CoerceError::not_representable(from, "char"))
}

macro_rules! numeric_coercion {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $label:literal, wrapping) => {
        numeric_coercion!(@impl $(#[$meta])* $name, $ty, $label, |s: &NbtString| {
            parse_wrapping(s, $label).map(|v| v as $ty)
        });
    };
    ($(#[$meta:meta])* $name:ident, $ty:ty, $label:literal, exact) => {
        numeric_coercion!(@impl $(#[$meta])* $name, $ty, $label, |s: &NbtString| {
            parse_exact::<$ty>(s, $label)
        });
    };
    (@impl $(#[$meta:meta])* $name:ident, $ty:ty, $label:literal, $parse:expr) => {
        $(#[$meta])*
        pub fn $name(&self) -> Result<$ty, CoerceError> {
            match self {
                Tag::End => Ok(0 as $ty),
                Tag::Byte(v) => Ok(*v as $ty),
                Tag::Short(v) => Ok(*v as $ty),
                Tag::Int(v) => Ok(*v as $ty),
                Tag::Long(v) => Ok(*v as $ty),
                Tag::Float(v) => Ok(*v as $ty),
                Tag::Double(v) => Ok(*v as $ty),
                Tag::String(s) => ($parse)(s),
                other => Err(CoerceError::not_representable(other.kind_name(), $label)),
            }
        }
    };
}

impl Tag {
    /// Истинность тега: для чисел `!= 0`, для строк, массивов и
    /// контейнеров непустота, для `End` всегда `false`.
    pub fn to_bool(&self) -> bool {
        match self {
            Tag::End => false,
            Tag::Byte(v) => *v != 0,
            Tag::Short(v) => *v != 0,
            Tag::Int(v) => *v != 0,
            Tag::Long(v) => *v != 0,
            Tag::Float(v) => *v != 0.0,
            Tag::Double(v) => *v != 0.0,
            Tag::ByteArray(v) => !v.is_empty(),
            Tag::String(s) => !s.is_empty(),
            Tag::List(list) => !list.is_empty(),
            Tag::Compound(compound) => !compound.is_empty(),
            Tag::IntArray(v) => !v.is_empty(),
        }
    }

    numeric_coercion!(
        /// Байт без знака; строка разбирается как i64 и усекается.
        to_byte, u8, "byte", wrapping
    );
    numeric_coercion!(to_i8, i8, "i8", wrapping);
    numeric_coercion!(to_i16, i16, "i16", wrapping);
    numeric_coercion!(to_i32, i32, "i32", wrapping);
    numeric_coercion!(to_i64, i64, "i64", exact);
    numeric_coercion!(
        /// Машинное знаковое целое.
        to_int, isize, "int", wrapping
    );
    numeric_coercion!(
        /// Машинное беззнаковое целое; строка должна помещаться в `usize`.
        to_uint, usize, "uint", exact
    );
    numeric_coercion!(to_u8, u8, "u8", exact);
    numeric_coercion!(to_u16, u16, "u16", exact);
    numeric_coercion!(to_u32, u32, "u32", exact);
    numeric_coercion!(to_u64, u64, "u64", exact);
    numeric_coercion!(to_f32, f32, "f32", exact);
    numeric_coercion!(to_f64, f64, "f64", exact);

    /// Символ Unicode с кодом, равным значению тега, усечённому до i32.
    ///
    /// Суррогаты и значения вне `0..=0x10FFFF` не представимы.
    pub fn to_rune(&self) -> Result<char, CoerceError> {
        let from = self.kind_name();
        let code = match self {
            Tag::End => return Ok('\0'),
            Tag::Byte(v) => *v as i32,
            Tag::Short(v) => *v as i32,
            Tag::Int(v) => *v,
            Tag::Long(v) => *v as i32,
            Tag::Float(v) => *v as i32,
            Tag::Double(v) => *v as i32,
            Tag::String(s) => parse_wrapping(s, "char")? as i32,
            _ => return Err(CoerceError::not_representable(from, "char")),
        };
        rune_from(code, from)
    }

    /// Байтовое представление: числа в big-endian, строка как есть.
    pub fn to_byte_array(&self) -> Result<Vec<u8>, CoerceError> {
        match self {
            Tag::End => Ok(Vec::new()),
            Tag::Byte(v) => Ok(vec![*v as u8]),
            Tag::Short(v) => Ok(v.to_be_bytes().to_vec()),
            Tag::Int(v) => Ok(v.to_be_bytes().to_vec()),
            Tag::Long(v) => Ok(v.to_be_bytes().to_vec()),
            Tag::Float(v) => Ok(v.to_be_bytes().to_vec()),
            Tag::Double(v) => Ok(v.to_be_bytes().to_vec()),
            Tag::ByteArray(v) => Ok(v.clone()),
            Tag::String(s) => Ok(s.as_bytes().to_vec()),
            other => Err(CoerceError::not_representable(
                other.kind_name(),
                "ByteArray",
            )),
        }
    }

    /// Массив i32; `Long` раскладывается в пару (старшие, младшие 32 бита).
    pub fn to_int_array(&self) -> Result<Vec<i32>, CoerceError> {
        match self {
            Tag::End => Ok(Vec::new()),
            Tag::Byte(v) => Ok(vec![*v as i32]),
            Tag::Short(v) => Ok(vec![*v as i32]),
            Tag::Int(v) => Ok(vec![*v]),
            Tag::Long(v) => Ok(vec![(*v >> 32) as i32, *v as i32]),
            Tag::IntArray(v) => Ok(v.clone()),
            other => Err(CoerceError::not_representable(
                other.kind_name(),
                "IntArray",
            )),
        }
    }
}

/// Научная запись вида `d.dddE±XX` с кратчайшей мантиссой.
///
/// Rust печатает `1.5E0`, поэтому показатель переписывается со знаком и
/// минимум двумя цифрами.
fn format_scientific(
    value: f64,
    repr: String,
) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    match repr.split_once('E') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}E{sign}{:02}", exp.unsigned_abs())
        }
        None => repr,
    }
}

fn write_sequence<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    f.write_str("[ ")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(" ]")
}

impl fmt::Display for Tag {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Tag::End => Ok(()),
            Tag::Byte(v) => write!(f, "{v}"),
            Tag::Short(v) => write!(f, "{v}"),
            Tag::Int(v) => write!(f, "{v}"),
            Tag::Long(v) => write!(f, "{v}"),
            Tag::Float(v) => f.write_str(&format_scientific(*v as f64, format!("{v:E}"))),
            Tag::Double(v) => f.write_str(&format_scientific(*v, format!("{v:E}"))),
            Tag::ByteArray(v) => write_sequence(f, v),
            Tag::String(s) => f.write_str(&s.to_string_lossy()),
            Tag::List(list) => {
                f.write_str(list.element_kind().name())?;
                write_sequence(f, list.iter())
            }
            Tag::Compound(compound) => {
                f.write_str("{ ")?;
                for (i, (name, tag)) in compound.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}({}): {tag}", tag.kind_name())?;
                }
                f.write_str(" }")
            }
            Tag::IntArray(v) => write_sequence(f, v),
        }
    }
}

/// Краткое описание тега для логов: вид и размер без содержимого.
pub fn describe(tag: &Tag) -> String {
    let mut out = tag.kind_name().to_string();
    let len = match tag {
        Tag::ByteArray(v) => Some(v.len()),
        Tag::String(s) => Some(s.len()),
        Tag::List(list) => Some(list.len()),
        Tag::Compound(compound) => Some(compound.len()),
        Tag::IntArray(v) => Some(v.len()),
        _ => None,
    };
    if let Some(len) = len {
        let _ = write!(out, "[{len}]");
    }
    out
}
