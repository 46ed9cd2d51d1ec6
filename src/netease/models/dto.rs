use serde::Deserialize;

// 聚合接口的不同部署版本会把歌曲数组放在 result.songs / data / songs
// 之一，歌手和专辑也有字符串与对象数组两种形状，这里全部兼容。

#[derive(Debug, Deserialize)]
pub struct SearchResp {
    pub code: Option<i64>,
    pub msg: Option<String>,
    pub result: Option<SearchResult>,
    #[serde(default)]
    pub data: Vec<SearchSong>,
    #[serde(default)]
    pub songs: Vec<SearchSong>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub songs: Vec<SearchSong>,
}

#[derive(Debug, Deserialize)]
pub struct SearchSong {
    pub id: i64,
    pub name: Option<String>,
    pub artists: Option<ArtistsField>,
    #[serde(default)]
    pub ar: Vec<ArtistInfo>,
    pub album: Option<AlbumField>,
    pub al: Option<AlbumInfo>,
    pub duration: Option<i64>,
    pub dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArtistsField {
    Joined(String),
    Many(Vec<ArtistInfo>),
}

#[derive(Debug, Deserialize)]
pub struct ArtistInfo {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AlbumField {
    Name(String),
    Object(AlbumInfo),
}

#[derive(Debug, Deserialize)]
pub struct AlbumInfo {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SongInfoResp {
    pub status: Option<i64>,
    pub msg: Option<String>,
    pub error: Option<String>,
    pub name: Option<String>,
    pub ar_name: Option<String>,
    pub al_name: Option<String>,
    pub url: Option<String>,
    pub pic: Option<String>,
    pub level: Option<String>,
    pub size: Option<String>,
    pub lyric: Option<String>,
}
