//! 摘要输出的配色

use serde::Deserialize;

/// 配色方案
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub heading: Color,
    pub label: Color,
    pub extension: Color,
    pub path: Color,
    pub size: Color,
    pub reset: Color,
}

/// 预设颜色宏
macro_rules! define_preset_colors {
    (
        $(
            $Name:ident => {
                ansi: $ansi:expr,
                aliases: [$($alias:expr),+ $(,)?]
            }
        ),+ $(,)?
    ) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub enum PresetColor {
            $($Name),+
        }

        impl PresetColor {
            /// 转ANSI转义码
            pub fn to_ansi(self) -> &'static str {
                match self {
                    $(PresetColor::$Name => $ansi),+
                }
            }

            /// 解析颜色名
            pub fn parse(name: &str) -> anyhow::Result<Self> {
                let name = name.to_ascii_lowercase();
                match name.as_str() {
                    $(
                        $($alias)|+ => Ok(PresetColor::$Name),
                    )+
                    _ => anyhow::bail!("Unknown preset color: {}", name),
                }
            }
        }
    };
}

define_preset_colors! {
    Reset => {
        ansi: "\x1b[0m",
        aliases: ["reset", "default", "none"]
    },
    Bold => {
        ansi: "\x1b[1m",
        aliases: ["bold"]
    },
    Red => {
        ansi: "\x1b[31m",
        aliases: ["red"]
    },
    Yellow => {
        ansi: "\x1b[33m",
        aliases: ["yellow", "yel"]
    },
    Blue => {
        ansi: "\x1b[34m",
        aliases: ["blue"]
    },
    Green => {
        ansi: "\x1b[32m",
        aliases: ["green"]
    },
    Cyan => {
        ansi: "\x1b[36m",
        aliases: ["cyan"]
    },
    Magenta => {
        ansi: "\x1b[35m",
        aliases: ["magenta", "purple"]
    },
    White => {
        ansi: "\x1b[37m",
        aliases: ["white"]
    },
}

/// 颜色（预设名或RGB）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Preset { name: String },
    RGB { r: u8, g: u8, b: u8 },
}

impl Color {
    fn preset(name: &str) -> Self {
        Color::Preset {
            name: name.to_string(),
        }
    }

    /// 转ANSI转义码
    pub fn to_ansi(&self) -> anyhow::Result<String> {
        match self {
            Color::Preset { name } => Ok(PresetColor::parse(name)?.to_ansi().to_string()),
            Color::RGB { r, g, b } => Ok(format!("\x1b[38;2;{};{};{}m", r, g, b)),
        }
    }

    /// 校验颜色配置
    fn validate(&self) -> anyhow::Result<()> {
        if let Color::Preset { name } = self {
            PresetColor::parse(name)?;
        }
        Ok(())
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::preset("reset")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading: Color::preset("bold"),
            label: Color::preset("reset"),
            extension: Color::preset("cyan"),
            path: Color::preset("blue"),
            size: Color::preset("yellow"),
            reset: Color::preset("reset"),
        }
    }
}

impl Theme {
    /// 校验主题配置
    pub fn validate(&self) -> anyhow::Result<()> {
        self.heading.validate()?;
        self.label.validate()?;
        self.extension.validate()?;
        self.path.validate()?;
        self.size.validate()?;
        self.reset.validate()?;
        Ok(())
    }
}

/// 给文本上色；`enabled` 为假时原样返回
#[derive(Clone, Copy, Debug)]
pub struct Painter<'a> {
    theme: &'a Theme,
    enabled: bool,
}

impl<'a> Painter<'a> {
    pub fn new(theme: &'a Theme, enabled: bool) -> Self {
        Self { theme, enabled }
    }

    pub fn paint(&self, color: &Color, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let start = color.to_ansi().unwrap_or_default();
        let end = self.theme.reset.to_ansi().unwrap_or_default();
        format!("{start}{text}{end}")
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }
}
