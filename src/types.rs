//! 通用类型定义
//!
//! 边权重与最短距离共用同一个 [`Weight`] 类型

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// 边权重 / 路径距离
///
/// 构造时保证为非负有限数，因此可以安全地实现全序。
/// [`Weight::INFINITY`] 只用作"不可达"的哨兵值，不能作为边权重。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// 源点距离
    pub const ZERO: Weight = Weight(0.0);
    /// 默认边权重
    pub const ONE: Weight = Weight(1.0);
    /// 不可达哨兵
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    /// 创建边权重，拒绝负数、NaN 和无穷大
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            // 统一 -0.0
            Ok(Self(value + 0.0))
        } else {
            Err(Error::InvalidWeight(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }

    /// 距离累加，和超出 `f64` 有限范围时返回 `None`
    ///
    /// 溢出的和会与 [`Weight::INFINITY`] 哨兵混淆，因此不能直接用 `+`。
    pub fn checked_add(self, rhs: Weight) -> Option<Weight> {
        let sum = self.0 + rhs.0;
        sum.is_finite().then_some(Weight(sum))
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, Add::add)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl TryFrom<f64> for Weight {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Weight::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_validation() {
        assert_eq!(Weight::new(2.5).unwrap().value(), 2.5);
        assert_eq!(Weight::new(0.0).unwrap(), Weight::ZERO);
        assert_eq!(Weight::new(-0.0).unwrap(), Weight::ZERO);

        assert!(matches!(Weight::new(-1.0), Err(Error::InvalidWeight(_))));
        assert!(Weight::new(f64::NAN).is_err());
        assert!(Weight::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_weight_ordering() {
        let mut weights = vec![Weight::from(3), Weight::INFINITY, Weight::ZERO, Weight::ONE];
        weights.sort();
        assert_eq!(
            weights,
            vec![Weight::ZERO, Weight::ONE, Weight::from(3), Weight::INFINITY]
        );
        assert!(Weight::INFINITY.is_infinite());
        assert!(!Weight::from(u32::MAX).is_infinite());
    }

    #[test]
    fn test_weight_arithmetic_and_display() {
        let total: Weight = [2, 3, 4].into_iter().map(Weight::from).sum();
        assert_eq!(total, Weight::from(9));
        assert_eq!(Weight::INFINITY + Weight::ONE, Weight::INFINITY);

        assert_eq!(Weight::from(2).to_string(), "2");
        assert_eq!(Weight::new(2.5).unwrap().to_string(), "2.5");
        assert_eq!(Weight::INFINITY.to_string(), "inf");
        assert_eq!(Weight::default(), Weight::ONE);
    }

    #[test]
    fn test_checked_add_detects_overflow() {
        let max = Weight::new(f64::MAX).unwrap();
        assert_eq!(Weight::from(2).checked_add(Weight::from(3)), Some(Weight::from(5)));
        assert_eq!(max.checked_add(Weight::ZERO), Some(max));
        assert_eq!(max.checked_add(max), None);
        assert_eq!(Weight::INFINITY.checked_add(Weight::ZERO), None);
    }

    #[test]
    fn test_weight_serde() {
        assert_eq!(serde_json::to_string(&Weight::from(4)).unwrap(), "4.0");
        let w: Weight = serde_json::from_str("1.5").unwrap();
        assert_eq!(w.value(), 1.5);
        assert!(serde_json::from_str::<Weight>("-1.0").is_err());
    }
}
