pub const OBJECT_INFOS: &str = "/objectinfos";
pub const SEGMENT_INFOS: &str = "/segmentinfos";
pub const QUERY: &str = "/query";
pub const QUERY_BY_EXAMPLE: &str = "/querybyexample";
pub const SEGMENT_BY_TIME: &str = "/segmentbytime";

pub fn object_info(database: &str, object_id: &str) -> String {
    format!("/objectinfo/{}/{}", database, object_id)
}

pub fn segment_info(database: &str, segment_id: &str) -> String {
    format!("/segmentinfo/{}/{}", database, segment_id)
}

pub fn object_segments(database: &str, object_id: &str) -> String {
    format!("/objectsegments/{}/{}", database, object_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_paths() {
        assert_eq!(object_info("vbs", "o1"), "/objectinfo/vbs/o1");
        assert_eq!(segment_info("vbs", "s1"), "/segmentinfo/vbs/s1");
        assert_eq!(object_segments("vbs", "o1"), "/objectsegments/vbs/o1");
    }
}
