//! 协议常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 8;

/// 格子总数
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// 行权重表长度（每行一个权重）
pub const SCORE_TABLE_LEN: usize = BOARD_SIZE;

/// 单方棋子总数上限，叠子数量用 u16 存储，合并叠子不会溢出
pub const MAX_SIDE_PIECES: usize = u16::MAX as usize;

/// 输入文件行数：走子方、算法、深度、8 行棋盘、权重
pub const INPUT_LINES: usize = 3 + BOARD_SIZE + 1;

/// 空格子的编码
pub const EMPTY_CELL: &str = "0";

/// 停一手的文本表示
pub const PASS_TOKEN: &str = "pass";

/// 选择 Alpha-Beta 搜索的算法标记
pub const ALPHABETA_TOKEN: &str = "ALPHABETA";

/// 默认搜索深度
pub const DEFAULT_MAX_DEPTH: u32 = 4;
