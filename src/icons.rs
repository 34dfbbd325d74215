//! Bundled icon library.
//!
//! Every icon is a variant of [`Icon`]; identifier strings and terminal glyphs
//! come from one exhaustive table, so a name can never resolve to a missing
//! graphic. Glyphs are drawn from the BMP symbol ranges for broad font coverage.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ConfigError;

macro_rules! icon_table {
    ($($variant:ident => $glyph:literal),* $(,)?) => {
        /// Identifier of a bundled icon (Feather icon set naming).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Icon {
            $($variant,)*
        }

        impl Icon {
            /// All icons in library order.
            pub const ALL: &'static [Icon] = &[$(Icon::$variant,)*];

            /// The identifier string, e.g. `"ChevronLeft"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Icon::$variant => stringify!($variant),)*
                }
            }

            /// The terminal glyph drawn for this icon.
            pub const fn glyph(self) -> &'static str {
                match self {
                    $(Icon::$variant => $glyph,)*
                }
            }
        }
    };
}

icon_table! {
    Activity => "∿",
    Airplay => "⏏",
    AlertCircle => "⊙",
    AlertOctagon => "⊗",
    AlertTriangle => "⚠",
    AlignCenter => "≡",
    AlignJustify => "☰",
    AlignLeft => "⇤",
    AlignRight => "⇥",
    Anchor => "⸸",
    Aperture => "◎",
    Archive => "▤",
    ArrowDown => "↓",
    ArrowDownCircle => "⇓",
    ArrowLeft => "←",
    ArrowLeftCircle => "⇐",
    ArrowRight => "→",
    ArrowRightCircle => "⇒",
    ArrowUp => "↑",
    ArrowUpCircle => "⇑",
    AtSign => "@",
    Award => "✪",
    BarChart => "▁",
    BarChart2 => "▃",
    Battery => "▭",
    BatteryCharging => "ϟ",
    Bell => "♫",
    BellOff => "♪",
    Bluetooth => "ᛒ",
    Bold => "Ⓑ",
    Book => "▯",
    BookOpen => "⊓",
    Bookmark => "⌑",
    Box => "□",
    Briefcase => "⏍",
    Calendar => "▦",
    Camera => "⌾",
    CameraOff => "⍉",
    Check => "✓",
    CheckCircle => "✔",
    CheckSquare => "☑",
    ChevronDown => "⌄",
    ChevronLeft => "‹",
    ChevronRight => "›",
    ChevronUp => "⌃",
    ChevronsDown => "⩔",
    ChevronsLeft => "«",
    ChevronsRight => "»",
    ChevronsUp => "⩓",
    Chrome => "◉",
    Circle => "○",
    Clipboard => "⎘",
    Clock => "◷",
    Cloud => "☁",
    CloudDrizzle => "⛆",
    CloudLightning => "☇",
    CloudOff => "⊘",
    CloudRain => "☔",
    CloudSnow => "❄",
    Code => "⟨",
    Coffee => "☕",
    Columns => "◫",
    Command => "⌘",
    Compass => "☸",
    Copy => "⧉",
    CornerDownLeft => "↵",
    CornerDownRight => "↳",
    CornerLeftDown => "↙",
    CornerLeftUp => "↖",
    CornerRightDown => "↘",
    CornerRightUp => "↗",
    CornerUpLeft => "↰",
    CornerUpRight => "↱",
    Cpu => "⌸",
    CreditCard => "▬",
    Crop => "⌗",
    Crosshair => "⌖",
    Database => "⛁",
    Delete => "⌫",
    Disc => "◍",
    Divide => "÷",
    DivideCircle => "⨸",
    DivideSquare => "⌹",
    DollarSign => "$",
    Download => "⤓",
    DownloadCloud => "⇩",
    Droplet => "◆",
    Edit => "✎",
    Edit2 => "✐",
    Edit3 => "✏",
    ExternalLink => "⬈",
    Eye => "◕",
    EyeOff => "◌",
    FastForward => "⏩",
    Feather => "⸙",
    File => "⍞",
    FileMinus => "⎕",
    FilePlus => "⌺",
    FileText => "≣",
    Film => "▥",
    Filter => "⏷",
    Flag => "⚑",
    Folder => "⌓",
    FolderMinus => "⊝",
    FolderPlus => "⊹",
    Frown => "☹",
    Gift => "⊠",
    GitBranch => "⎇",
    GitCommit => "⊸",
    GitMerge => "⋈",
    GitPullRequest => "⇄",
    Globe => "♁",
    Grid => "▩",
    HardDrive => "▰",
    Hash => "#",
    Headphones => "◠",
    Heart => "♥",
    HelpCircle => "?",
    Hexagon => "⬡",
    Home => "⌂",
    Image => "▨",
    Inbox => "⊔",
    Info => "ℹ",
    Italic => "ⅈ",
    Key => "⚷",
    Layers => "≋",
    Layout => "◰",
    LifeBuoy => "⊛",
    Link => "⛓",
    Link2 => "∞",
    List => "☷",
    Loader => "⁂",
    Lock => "⊡",
    LogIn => "⍇",
    LogOut => "⍈",
    Mail => "✉",
    Map => "▚",
    MapPin => "⚲",
    Maximize => "⤢",
    Maximize2 => "⇱",
    Meh => "☐",
    Menu => "☲",
    MessageCircle => "◯",
    MessageSquare => "▢",
    Mic => "⍝",
    MicOff => "⍜",
    Minimize => "⤡",
    Minimize2 => "⇲",
    Minus => "−",
    MinusCircle => "⊖",
    MinusSquare => "⊟",
    Monitor => "⎚",
    Moon => "☾",
    MoreHorizontal => "⋯",
    MoreVertical => "⋮",
    MousePointer => "⇖",
    Move => "✥",
    Music => "♬",
    Navigation => "➤",
    Navigation2 => "▲",
    Octagon => "⯃",
    Package => "⧈",
    Paperclip => "⌇",
    Pause => "⏸",
    PauseCircle => "⏯",
    PenTool => "✒",
    Percent => "%",
    Phone => "✆",
    PieChart => "◔",
    Play => "▶",
    PlayCircle => "⏵",
    Plus => "+",
    PlusCircle => "⊕",
    PlusSquare => "⊞",
    Pocket => "◡",
    Power => "⏻",
    Printer => "⎙",
    Radio => "⦿",
    RefreshCcw => "↺",
    RefreshCw => "↻",
    Repeat => "⟲",
    Rewind => "⏪",
    RotateCcw => "↶",
    RotateCw => "⟳",
    Rss => "◜",
    Save => "⎗",
    Scissors => "✂",
    Search => "⌕",
    Send => "➢",
    Server => "⛃",
    Settings => "⚙",
    Share => "⇪",
    Share2 => "⋰",
    Shield => "⛉",
    ShieldOff => "⛊",
    ShoppingBag => "⊎",
    ShoppingCart => "⊻",
    Shuffle => "⤮",
    Sidebar => "◧",
    SkipBack => "⏮",
    SkipForward => "⏭",
    Slash => "⁄",
    Sliders => "⫶",
    Smartphone => "⌷",
    Smile => "☺",
    Speaker => "◘",
    Square => "◻",
    Star => "★",
    StopCircle => "⏹",
    Sun => "☀",
    Sunrise => "◓",
    Sunset => "◒",
    Table => "▧",
    Tablet => "▮",
    Tag => "⌦",
    Target => "⊚",
    Terminal => "⌨",
    Thermometer => "⊺",
    ThumbsDown => "⊥",
    ThumbsUp => "⊤",
    ToggleLeft => "◐",
    ToggleRight => "◑",
    Tool => "⚒",
    Trash => "⌧",
    Trash2 => "⛋",
    TrendingDown => "⤥",
    TrendingUp => "⤤",
    Triangle => "△",
    Truck => "⛟",
    Tv => "▣",
    Type => "T",
    Umbrella => "☂",
    Underline => "_",
    Unlock => "⊏",
    Upload => "⤒",
    UploadCloud => "⇧",
    User => "⚇",
    UserCheck => "⚉",
    UserMinus => "⚆",
    UserPlus => "⚈",
    UserX => "⛌",
    Users => "⚭",
    Video => "⊳",
    VideoOff => "▷",
    Voicemail => "⚯",
    Volume => "◁",
    Volume1 => "◀",
    Volume2 => "◂",
    VolumeX => "◃",
    Watch => "⌚",
    Wifi => "⌔",
    WifiOff => "⌀",
    Wind => "≈",
    X => "✕",
    XCircle => "Ⓧ",
    XOctagon => "⯄",
    XSquare => "⮽",
    Zap => "↯",
    ZapOff => "⚡",
    ZoomIn => "⨁",
    ZoomOut => "⦵",
}

/// Glyph for the previous-page control.
pub const PREV: Icon = Icon::ChevronLeft;

/// Glyph for the next-page control.
pub const NEXT: Icon = Icon::ChevronRight;

/// Glyph for the close control.
pub const CLOSE: Icon = Icon::X;

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize an identifier so `ChevronLeft`, `chevron-left` and
/// `chevron_left` all compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Icon {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| normalize(icon.name()) == wanted)
            .ok_or_else(|| ConfigError::UnknownIcon(s.to_string()))
    }
}

/// An ordered, immutable list of selectable icons.
///
/// Cloning is cheap; all clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    icons: Arc<[Icon]>,
}

impl Catalog {
    /// Build a catalog from an explicit icon list.
    pub fn new(icons: Vec<Icon>) -> Self {
        Self {
            icons: icons.into(),
        }
    }

    /// Every bundled icon in library order.
    pub fn bundled() -> Self {
        Self::new(Icon::ALL.to_vec())
    }

    /// Build a catalog from identifier strings, failing on the first unknown name.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let icons = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Icon>, _>>()?;
        Ok(Self::new(icons))
    }

    pub fn as_slice(&self) -> &[Icon] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}
