//! 实体基础 trait

use procura_common::RecordId;

/// 实体 trait
pub trait Entity {
    fn id(&self) -> &RecordId;
}
