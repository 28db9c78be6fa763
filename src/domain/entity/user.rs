use serde::{Deserialize, Serialize};

/// User は発行対象メッセージのペイロードを表す。
/// `id` は省略可能で、未指定の場合はシリアライズ結果にも含めない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}
