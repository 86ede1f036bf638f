use crate::table::{Stage, Table};

impl Stage {
  /// Stored size in bytes
  /// 存储字节数
  #[inline]
  pub fn bytes(&self) -> usize {
    self.li.len() * self.width.bytes()
  }
}

impl Table {
  /// Total bytes of every present stage
  /// 所有存在阶段的总字节数
  pub fn calc_size(&self) -> usize {
    total(
      &self.stage1,
      self.stage2_offsets.as_ref(),
      &self.stage2,
      self.stage3.as_ref(),
    )
  }
}

#[inline]
pub(crate) fn total(
  stage1: &Stage,
  stage2_offsets: Option<&Stage>,
  stage2: &Stage,
  stage3: Option<&Stage>,
) -> usize {
  stage1.bytes()
    + stage2_offsets.map_or(0, Stage::bytes)
    + stage2.bytes()
    + stage3.map_or(0, Stage::bytes)
}
