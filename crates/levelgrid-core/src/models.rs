use serde::{Deserialize, Serialize};

/// Characters that may appear in a level row, compared case-insensitively.
///
/// The teleporter `t` is not part of the set.
pub const GRID_SYMBOLS: &str = "wseklgfbdhijcno~";

/// Number of leading lines in a level file that carry version information.
pub const DEFAULT_HEADER_LINES: usize = 3;

/// Returns `true` when `c` (already lowercased) is a grid tile code.
pub fn is_grid_symbol(c: char) -> bool {
    GRID_SYMBOLS.contains(c)
}

/// Classification assigned to every input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// One of the fixed leading header lines; never classified.
    Header,
    /// A level title or author credit.
    Title,
    /// A row of a level layout.
    Grid,
    /// Blank lines and anything else that is not a grid row.
    Other,
}

impl LineKind {
    /// Whether the line contributes to the current level.
    pub fn is_grid(self) -> bool {
        self == LineKind::Grid
    }
}

/// A tile code as rendered by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    ImpenetrableWall,
    Start,
    Exit,
    Lock,
    Key,
    Hole,
    Cement,
    Jellybean,
    Bomb,
    Dynamite,
    Guard,
    Money,
    Oxygen,
    Gun,
    Water,
    Teleporter,
}

impl Tile {
    /// Every tile in legend order.
    pub const ALL: [Tile; 17] = [
        Tile::Wall,
        Tile::ImpenetrableWall,
        Tile::Start,
        Tile::Exit,
        Tile::Lock,
        Tile::Key,
        Tile::Hole,
        Tile::Cement,
        Tile::Jellybean,
        Tile::Bomb,
        Tile::Dynamite,
        Tile::Guard,
        Tile::Money,
        Tile::Oxygen,
        Tile::Gun,
        Tile::Water,
        Tile::Teleporter,
    ];

    /// Look up a tile by its symbol. Case-insensitive.
    pub fn from_symbol(c: char) -> Option<Tile> {
        let tile = match c.to_ascii_lowercase() {
            'w' => Tile::Wall,
            'i' => Tile::ImpenetrableWall,
            's' => Tile::Start,
            'e' => Tile::Exit,
            'l' => Tile::Lock,
            'k' => Tile::Key,
            'h' => Tile::Hole,
            'c' => Tile::Cement,
            'j' => Tile::Jellybean,
            'b' => Tile::Bomb,
            'd' => Tile::Dynamite,
            'g' => Tile::Guard,
            'f' => Tile::Money,
            'o' => Tile::Oxygen,
            'n' => Tile::Gun,
            '~' => Tile::Water,
            't' => Tile::Teleporter,
            _ => return None,
        };
        Some(tile)
    }

    /// The symbol used for this tile in level files.
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => 'w',
            Tile::ImpenetrableWall => 'i',
            Tile::Start => 's',
            Tile::Exit => 'e',
            Tile::Lock => 'l',
            Tile::Key => 'k',
            Tile::Hole => 'h',
            Tile::Cement => 'c',
            Tile::Jellybean => 'j',
            Tile::Bomb => 'b',
            Tile::Dynamite => 'd',
            Tile::Guard => 'g',
            Tile::Money => 'f',
            Tile::Oxygen => 'o',
            Tile::Gun => 'n',
            Tile::Water => '~',
            Tile::Teleporter => 't',
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Tile::Wall => "wall",
            Tile::ImpenetrableWall => "impenetrable wall",
            Tile::Start => "start",
            Tile::Exit => "exit",
            Tile::Lock => "lock",
            Tile::Key => "key",
            Tile::Hole => "hole",
            Tile::Cement => "cement",
            Tile::Jellybean => "jellybean",
            Tile::Bomb => "bomb",
            Tile::Dynamite => "dynamite",
            Tile::Guard => "guard",
            Tile::Money => "money",
            Tile::Oxygen => "oxygen",
            Tile::Gun => "gun",
            Tile::Water => "water",
            Tile::Teleporter => "teleporter",
        }
    }
}

/// One level, recorded when its run of grid rows ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    /// 1-based position of the level in the file.
    pub index: usize,
    /// 1-based file line number of the level's first row.
    pub first_line: usize,
    /// Number of rows.
    pub height: usize,
    /// Widest row, teleporter codes included.
    pub max_width_original: usize,
    /// Widest row after collapsing teleporter codes.
    pub max_width_cleaned: usize,
    /// Title line seen most recently before the level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author line following the title, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Aggregate grid statistics for one level file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    /// Number of levels found.
    pub total_levels: usize,
    /// Widest grid row with teleporter codes left as written.
    pub max_width_original: usize,
    /// Widest grid row after `t<digits>` collapses to `t`.
    pub max_width_cleaned: usize,
    /// Tallest level, in rows.
    pub max_height: usize,
    /// Lines consumed, header included.
    #[serde(default)]
    pub lines_read: usize,
    /// Lines classified as grid rows.
    #[serde(default)]
    pub grid_lines: usize,
    /// Lines classified as titles or author credits.
    #[serde(default)]
    pub title_lines: usize,
    /// Per-level breakdown in file order.
    #[serde(default)]
    pub levels: Vec<LevelSummary>,
}

impl LevelStats {
    /// The grid a renderer must allocate to fit every level: `(width, height)`.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (self.max_width_cleaned, self.max_height)
    }

    /// Heights of all levels in file order.
    pub fn heights(&self) -> Vec<usize> {
        self.levels.iter().map(|l| l.height).collect()
    }
}
