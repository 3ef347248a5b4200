#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use parking_lot::{Mutex, MutexGuard};
    use time::macros::date;

    use crate::config::{self, ApiConfig, DEFAULT_API_BASE_URL};
    use crate::error::ErrorCode;
    use crate::image_url::{get_image_url, resolve_image_path, ImageUrlBuilder};
    use crate::picture::{format_picture_date, parse_picture_date, PictureFileName, PictureRef, PictureType};
    use crate::validation::{check_base_url, BaseUrlIssue};

    // Every test that touches the process-wide holder runs under this lock.
    static GLOBAL: Mutex<()> = parking_lot::const_mutex(());

    fn global() -> MutexGuard<'static, ()> {
        let guard = GLOBAL.lock();
        config::reset();
        guard
    }

    #[test]
    fn test_default_config() {
        let _g = global();
        assert_eq!(config::api_base_url(), "http://thongtestnamloc.duckdns.org:8000");
        assert_eq!(config::current(), ApiConfig::default());
        assert_eq!(ApiConfig::default().api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_write_then_read() {
        let _g = global();
        for value in ["http://h:8000", "", "not a url/", "https://example.com/api/"] {
            config::set_api_base_url(value);
            assert_eq!(config::api_base_url(), value);
        }

        let previous = config::replace(ApiConfig::new("http://other:9000"));
        assert_eq!(previous.api_base_url, "https://example.com/api/");
        assert_eq!(config::api_base_url(), "http://other:9000");

        config::reset();
        assert_eq!(config::api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_default_image_url() {
        let _g = global();
        assert_eq!(
            get_image_url("id", "2024-06-01", "photo.png"),
            "http://thongtestnamloc.duckdns.org:8000/picture/view/id/2024-06-01/photo.png"
        );
    }

    #[test]
    fn test_template_matches_concatenation() {
        let _g = global();
        config::set_api_base_url("http://10.0.0.5:8000");
        let cases = [
            ("NK", "2025-08-17", "5-CMR1_1.png"),
            ("", "", ""),
            ("a/b", "?", "#frag"),
        ];
        for (p, d, f) in cases {
            let expected = config::api_base_url() + "/picture/view/" + p + "/" + d + "/" + f;
            assert_eq!(get_image_url(p, d, f), expected);
        }
    }

    #[test]
    fn test_late_binding() {
        let _g = global();
        config::set_api_base_url("http://a:1");
        let first = get_image_url("CT", "2024-01-01", "x.jpg");
        config::set_api_base_url("http://b:2");
        let second = get_image_url("CT", "2024-01-01", "x.jpg");

        assert_ne!(first, second);
        assert_eq!(first, "http://a:1/picture/view/CT/2024-01-01/x.jpg");
        assert_eq!(second, "http://b:2/picture/view/CT/2024-01-01/x.jpg");
    }

    #[test]
    fn test_no_encoding_or_normalisation() {
        let _g = global();
        config::set_api_base_url("http://h:8000");
        assert_eq!(
            get_image_url("cat one", "2024-01-01", "f.jpg"),
            "http://h:8000/picture/view/cat one/2024-01-01/f.jpg"
        );

        config::set_api_base_url("http://h:8000/");
        assert_eq!(get_image_url("NK", "d", "f"), "http://h:8000//picture/view/NK/d/f");
    }

    #[test]
    fn test_non_string_segments() {
        let _g = global();
        config::set_api_base_url("http://h");
        assert_eq!(get_image_url(PictureType::XuatKho, 2024, 7), "http://h/picture/view/XK/2024/7");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn test_set_logs_without_rejecting() {
        let _g = global();
        let logs = capture_logs(|| config::set_api_base_url(" ftp://bad/"));
        assert_eq!(config::api_base_url(), " ftp://bad/");

        let warnings: Vec<_> = logs.lines().filter(|l| l.contains("WARN")).collect();
        assert_eq!(warnings.len(), 3, "{logs}");
        for issue in [BaseUrlIssue::MissingScheme, BaseUrlIssue::TrailingSlash, BaseUrlIssue::ContainsWhitespace] {
            assert!(warnings.iter().any(|l| l.contains(&issue.to_string())), "{issue}: {logs}");
        }
        assert!(logs.lines().any(|l| l.contains("DEBUG") && l.contains("api base url changed")), "{logs}");
    }

    #[test]
    fn test_replace_logs_issues() {
        let _g = global();
        let logs = capture_logs(|| {
            config::replace(ApiConfig::new("http://h:8000/"));
        });
        assert_eq!(config::api_base_url(), "http://h:8000/");

        let warnings: Vec<_> = logs.lines().filter(|l| l.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "{logs}");
        assert!(warnings[0].contains(&BaseUrlIssue::TrailingSlash.to_string()), "{logs}");
        assert!(logs.contains("api config replaced"), "{logs}");

        let logs = capture_logs(config::reset);
        assert!(!logs.contains("WARN"), "{logs}");
    }

    #[test]
    fn test_builder_snapshot_is_independent() {
        let _g = global();
        config::set_api_base_url("http://snap:1");
        let builder = ImageUrlBuilder::from_global();
        config::set_api_base_url("http://later:2");

        assert_eq!(builder.base_url(), "http://snap:1");
        assert_eq!(builder.image_url("NT", "d", "f"), "http://snap:1/picture/view/NT/d/f");
        assert_eq!(get_image_url("NT", "d", "f"), "http://later:2/picture/view/NT/d/f");
    }

    #[test]
    fn test_builder_matches_global() {
        let _g = global();
        let builder = ImageUrlBuilder::default();
        assert_eq!(builder.config(), &ApiConfig::default());
        assert_eq!(
            builder.image_url("id", "2024-06-01", "photo.png"),
            get_image_url("id", "2024-06-01", "photo.png")
        );
    }

    #[test]
    fn test_resolve_paths() {
        let builder = ImageUrlBuilder::with_base_url("http://h:8000");
        assert_eq!(
            builder.resolve("/picture/view/NK/2025-08-17/5-CMR1_1.png"),
            "http://h:8000/picture/view/NK/2025-08-17/5-CMR1_1.png"
        );
        assert_eq!(builder.resolve("picture/folders"), "http://h:8000/picture/folders");
        assert_eq!(builder.resolve("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");

        let _g = global();
        assert_eq!(
            resolve_image_path("/picture/view/XK/2025-01-02/a.jpg"),
            "http://thongtestnamloc.duckdns.org:8000/picture/view/XK/2025-01-02/a.jpg"
        );
    }

    #[test]
    fn test_config_serde() {
        let config: ApiConfig = serde_json::from_str(r#"{"apiBaseUrl":"http://h:8000"}"#).unwrap();
        assert_eq!(config.api_base_url, "http://h:8000");
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"apiBaseUrl":"http://h:8000"}"#);

        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_base_url_checks() {
        assert!(check_base_url(DEFAULT_API_BASE_URL).is_empty());
        assert!(check_base_url("https://example.com").is_empty());
        assert_eq!(check_base_url(""), vec![BaseUrlIssue::Empty]);
        assert_eq!(check_base_url("http://h:8000/"), vec![BaseUrlIssue::TrailingSlash]);
        assert_eq!(
            check_base_url("h :8000/"),
            vec![BaseUrlIssue::MissingScheme, BaseUrlIssue::TrailingSlash, BaseUrlIssue::ContainsWhitespace]
        );
    }

    #[test]
    fn test_picture_types() {
        let codes: Vec<_> = PictureType::ALL.iter().map(|ty| ty.code()).collect();
        assert_eq!(codes, ["NK", "CT", "NT", "XK"]);
        assert_eq!(PictureType::CanThue.label(), "CanThue");
        assert_eq!(PictureType::NhapTau.to_string(), "NT");

        assert_eq!("XK".parse::<PictureType>().unwrap(), PictureType::XuatKho);
        let err = "nk".parse::<PictureType>().unwrap_err();
        assert!(err.is(ErrorCode::UnknownPictureType));

        assert_eq!(serde_json::to_string(&PictureType::NhapKho).unwrap(), "\"NK\"");
        let ty: PictureType = serde_json::from_str("\"CT\"").unwrap();
        assert_eq!(ty, PictureType::CanThue);
    }

    #[test]
    fn test_file_names() {
        let name = PictureFileName::new("PH001", 2, 1);
        assert_eq!(name.stem(), "PH001-CMR2_1");
        assert_eq!(name.with_extension(".jpg"), "PH001-CMR2_1.jpg");
        assert_eq!(name.with_extension("png"), "PH001-CMR2_1.png");
        assert_eq!(name.with_extension(""), "PH001-CMR2_1");

        assert_eq!(PictureFileName::parse("PH001-CMR2_1.jpg").unwrap(), name);
        assert_eq!(PictureFileName::parse("PH001-CMR2_1").unwrap(), name);
        assert_eq!("5-CMR1_1.png".parse::<PictureFileName>().unwrap(), PictureFileName::new("5", 1, 1));
    }

    #[test]
    fn test_file_name_edge_cases() {
        // The ticket part is greedy, so the last marker wins.
        let parsed = PictureFileName::parse("A-CMR1_2-CMR3_4.png").unwrap();
        assert_eq!(parsed, PictureFileName::new("A-CMR1_2", 3, 4));

        let parsed = PictureFileName::parse("PH001-CMR1_99999999999.jpg").unwrap();
        assert_eq!(parsed.sequence, 99_999_999_999);

        // Only the last extension is stripped.
        let err = PictureFileName::parse("A-CMR1_2-CMR3_4.tar.gz").unwrap_err();
        assert!(err.is(ErrorCode::InvalidFileName));

        for bad in ["", ".png", "-CMR1_1.png", "PH001-CMR_1.jpg", "PH001-CMR1_.jpg", "PH001-CMRx_1", "PH001_1", "PH001-CMR1_99999999999999999999"] {
            let err = PictureFileName::parse(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFileName, "{bad}");
            assert_eq!(err.details.as_deref(), Some(bad));
        }
    }

    #[test]
    fn test_picture_dates() {
        assert_eq!(format_picture_date(date!(2025 - 08 - 17)), "2025-08-17");
        assert_eq!(format_picture_date(date!(2024 - 01 - 02)), "2024-01-02");
        assert_eq!(parse_picture_date("2024-06-01").unwrap(), date!(2024 - 06 - 01));
        assert_eq!(parse_picture_date("2024-6-1").unwrap(), date!(2024 - 06 - 01));
        assert_eq!(parse_picture_date("2025-8-17").unwrap(), date!(2025 - 08 - 17));

        for bad in ["2024-13-01", "2024/06/01", "24-06-01", ""] {
            assert!(parse_picture_date(bad).unwrap_err().is(ErrorCode::InvalidDate), "{bad}");
        }
    }

    #[test]
    fn test_picture_ref_urls() {
        let name = PictureFileName::new("PH001", 2, 1);
        let picture = PictureRef::from_parts(PictureType::CanThue, date!(2025 - 08 - 17), &name, "jpg");
        assert_eq!(picture.date, "2025-08-17");
        assert_eq!(picture.filename, "PH001-CMR2_1.jpg");
        assert_eq!(picture.file_name().unwrap(), name);

        let builder = ImageUrlBuilder::with_base_url("http://h:8000");
        assert_eq!(picture.url_with(&builder), "http://h:8000/picture/view/CT/2025-08-17/PH001-CMR2_1.jpg");

        let _g = global();
        config::set_api_base_url("http://h:9000");
        assert_eq!(picture.url(), "http://h:9000/picture/view/CT/2025-08-17/PH001-CMR2_1.jpg");
    }

    #[test]
    fn test_error_display() {
        let err = PictureFileName::parse("nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid picture file name: expected [ticket]-CMR[camera]_[sequence] (nope)"
        );
    }
}
