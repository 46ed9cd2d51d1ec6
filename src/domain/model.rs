//! 点歌流程的规范化数据模型
//!
//! 供应商返回的原始 JSON 在 `netease::models` 中归一化为这里的类型，
//! 流程各层只依赖这里的字段。

/// 搜索结果中的单曲概要
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct SongSummary {
    pub id: i64,
    pub name: String,
    /// 歌手名，多位歌手以 "/" 连接
    pub artists: String,
    pub album: String,
    /// 时长（毫秒）
    pub duration_ms: i64,
}

/// 歌曲完整信息（播放链接、封面、歌词）
///
/// `url` 非空是不变量：供应商未返回播放链接时归一化层直接报错，
/// 不会构造出该类型。
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SongInfo {
    pub id: i64,
    pub name: String,
    /// 歌手名，可能为空（信息接口偶尔缺字段，由调用方兜底）
    pub artist: String,
    pub album: String,
    /// 播放链接
    pub url: String,
    /// 专辑封面链接，可能为空
    pub cover: String,
    /// 实际返回的音质等级
    pub level: String,
    /// 文件大小，供应商原样返回的字符串
    pub size: String,
    pub lyric: Option<String>,
}
