//! Pack per-case mapping indexes into one property value
//! 将各大小写映射索引打包为单个属性值
//!
//! A property value holds up to 8 lanes, one byte each, lane `i` at bits
//! `8 * i`. A lane is a 7-bit index; bit 7 marks a special (multi code
//! point) mapping.
//! 属性值最多包含 8 个通道，每个 1 字节，第 `i` 个位于 `8 * i` 位。
//! 通道为 7 位索引，第 7 位标记特殊（多码点）映射。
//!
//! Special mappings of 2 or 3 code points are compressed into one `u64`:
//! 2 或 3 个码点的特殊映射压缩为一个 `u64`：
//!
//! ```text
//! | bit 63     | 62..42    | 41..21    | 20..0     |
//! | len is 3   | 3rd cp    | 2nd cp    | 1st cp    |
//! ```

use crate::error::{Error, Result};

pub const LANE_MAX: u32 = 0x7F;
pub const SPECIAL: u8 = 0x80;
pub const MAX_LANES: usize = 8;
pub const CP_BITS: u32 = 21;
pub const CP_MAX: u32 = (1 << CP_BITS) - 1;
const LEN3: u64 = 1 << 63;

/// One lane of a packed property value
/// 打包属性值的单个通道
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lane {
  /// Index into the shared simple mapping offsets
  /// 简单映射偏移表索引
  Simple(u32),
  /// Index into the special mappings of this case
  /// 该大小写的特殊映射索引
  Special(u32),
}

impl Lane {
  #[inline]
  fn byte(self, lane: usize) -> Result<u8> {
    let (index, flag) = match self {
      Self::Simple(i) => (i, 0),
      Self::Special(i) => (i, SPECIAL),
    };
    if index > LANE_MAX {
      return Err(Error::LaneOverflow { lane, index });
    }
    Ok(flag | index as u8)
  }
}

/// Pack lanes, first lane in the lowest byte
/// 打包通道，第一个通道位于最低字节
pub fn pack_lanes(lanes: &[Lane]) -> Result<u64> {
  if lanes.len() > MAX_LANES {
    return Err(Error::TooManyLanes(lanes.len()));
  }
  lanes.iter().enumerate().try_fold(0u64, |acc, (i, lane)| {
    Ok(acc | (u64::from(lane.byte(i)?) << (8 * i)))
  })
}

/// Read lane `i` back
/// 读回第 `i` 个通道
#[inline]
pub fn unpack_lane(value: u64, i: usize) -> Option<Lane> {
  if i >= MAX_LANES {
    return None;
  }
  let b = (value >> (8 * i)) as u8;
  let index = u32::from(b & LANE_MAX as u8);
  Some(if b & SPECIAL == 0 {
    Lane::Simple(index)
  } else {
    Lane::Special(index)
  })
}

/// Compress a 2 or 3 code point mapping into one word
/// 将 2 或 3 个码点的映射压缩为一个字
pub fn pack_mapping(cps: &[u32]) -> Result<u64> {
  if !(2..=3).contains(&cps.len()) {
    return Err(Error::MappingLen(cps.len()));
  }
  let mut word = if cps.len() == 3 { LEN3 } else { 0 };
  for (i, &cp) in cps.iter().enumerate() {
    if cp > CP_MAX {
      return Err(Error::CodePointOverflow(cp));
    }
    word |= u64::from(cp) << (CP_BITS as usize * i);
  }
  Ok(word)
}

/// Expand a compressed mapping, returns code points and length
/// 展开压缩映射，返回码点与长度
#[inline]
pub fn unpack_mapping(word: u64) -> ([u32; 3], usize) {
  let cp = |i: u32| ((word >> (CP_BITS * i)) & u64::from(CP_MAX)) as u32;
  let len = if word & LEN3 == 0 { 2 } else { 3 };
  ([cp(0), cp(1), cp(2)], len)
}
