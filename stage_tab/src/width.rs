//! Integer storage width
//! 整数存储宽度

use crate::error::{Error, Result};

/// Byte width of a table element, the smallest C integer type that holds it
/// 表元素字节宽度，即能容纳它的最小整数类型
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Width {
  #[default]
  W1 = 1,
  W2 = 2,
  W4 = 4,
  W8 = 8,
}

impl Width {
  /// Minimal width able to store `v`
  /// 存储 `v` 所需的最小宽度
  #[inline]
  pub const fn of(v: u64) -> Self {
    if v > 0xFFFF_FFFF {
      Self::W8
    } else if v > 0xFFFF {
      Self::W4
    } else if v > 0xFF {
      Self::W2
    } else {
      Self::W1
    }
  }

  /// Minimal width able to store every element, W1 when empty
  /// 存储所有元素的最小宽度，空时为 W1
  #[inline]
  pub fn of_max(li: &[u64]) -> Self {
    Self::of(li.iter().copied().max().unwrap_or(0))
  }

  /// Convert from byte count
  /// 从字节数转换
  #[inline]
  pub fn from_u8(v: u8) -> Result<Self> {
    match v {
      1 => Ok(Self::W1),
      2 => Ok(Self::W2),
      4 => Ok(Self::W4),
      8 => Ok(Self::W8),
      _ => Err(Error::UnknownWidth(v)),
    }
  }

  #[inline]
  pub const fn bytes(self) -> usize {
    self as usize
  }

  /// Largest value this width holds
  /// 该宽度可容纳的最大值
  #[inline]
  pub const fn max(self) -> u64 {
    match self {
      Self::W1 => u8::MAX as u64,
      Self::W2 => u16::MAX as u64,
      Self::W4 => u32::MAX as u64,
      Self::W8 => u64::MAX,
    }
  }
}
