use shared::PictureType;

pub struct Config {
    pub app_title: &'static str,
    pub default_picture_type: PictureType,
    pub default_extension: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            app_title: "NamLoc Pictures",
            default_picture_type: PictureType::NhapKho,
            default_extension: "jpg",
        }
    }
}

pub const CONFIG: Config = Config::new();
