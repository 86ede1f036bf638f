//! Block size search configuration
//! 块大小搜索配置

use crate::error::{Error, Result};

/// Search configuration options
/// 搜索配置选项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Coarse phase step
  /// 粗搜步长
  Step(usize),

  /// Largest block size tried by the coarse phase
  /// 粗搜尝试的最大块大小
  Ceil(usize),

  /// Step divisor of each refine round
  /// 每轮细化的步长除数
  Factor(usize),

  /// Refine while step >= this
  /// 步长 >= 此值时继续细化
  MinStep(usize),

  /// Candidates per refine round
  /// 每轮细化的候选数
  Neighbors(usize),
}

/// Internal configuration struct
/// 内部配置结构体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  pub step: usize,
  pub ceil: usize,
  pub factor: usize,
  pub min_step: usize,
  pub neighbors: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      step: default::STEP,
      ceil: default::CEIL,
      factor: default::FACTOR,
      min_step: default::MIN_STEP,
      neighbors: default::NEIGHBORS,
    }
  }
}

impl From<&[Conf]> for Config {
  fn from(conf_li: &[Conf]) -> Self {
    let mut config = Self::default();
    for &conf in conf_li {
      match conf {
        Conf::Step(v) => config.step = v,
        Conf::Ceil(v) => config.ceil = v,
        Conf::Factor(v) => config.factor = v,
        Conf::MinStep(v) => config.min_step = v,
        Conf::Neighbors(v) => config.neighbors = v,
      }
    }
    config
  }
}

impl Config {
  /// Reject settings that would try a zero block size or nothing at all
  /// 拒绝会产生零块大小或没有候选的设置
  pub fn check(&self) -> Result<()> {
    if self.step == 0 {
      return err("step", self.step, "must be > 0");
    }
    if self.ceil < self.step {
      return err("ceil", self.ceil, "must be >= step");
    }
    if self.factor < 2 {
      return err("factor", self.factor, "must be >= 2");
    }
    if self.min_step < self.factor {
      return err("min_step", self.min_step, "must be >= factor");
    }
    // base + factor * step - prev == base
    if self.neighbors < self.factor {
      return err("neighbors", self.neighbors, "must be >= factor");
    }
    Ok(())
  }

  /// Block sizes of the coarse phase
  /// 粗搜阶段的块大小
  pub fn coarse(&self) -> Vec<usize> {
    (1..=self.ceil / self.step).map(|n| n * self.step).collect()
  }

  /// Number of refine rounds
  /// 细化轮数
  pub fn rounds(&self) -> usize {
    let mut step = self.step;
    let mut n = 0;
    while step >= self.min_step {
      step /= self.factor;
      n += 1;
    }
    n
  }

  /// Total candidates the search evaluates
  /// 搜索评估的候选总数
  pub fn plan(&self) -> usize {
    self.ceil / self.step + self.rounds() * self.neighbors
  }
}

fn err(name: &'static str, value: usize, why: &'static str) -> Result<()> {
  Err(Error::Conf { name, value, why })
}

/// Default values
/// 默认值
pub mod default {
  pub const STEP: usize = 64;
  pub const CEIL: usize = 1024;
  pub const FACTOR: usize = 8;
  pub const MIN_STEP: usize = 8;
  pub const NEIGHBORS: usize = 15;

  /// Block size used without tuning, best for Unicode 16.0.0 case mappings
  /// 不调优时的块大小，Unicode 16.0.0 大小写映射的最优值
  pub const BLOCK_SIZE: usize = 64;
}
