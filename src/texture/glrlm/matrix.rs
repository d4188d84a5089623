use crate::image::{ImageU8, ImageView};
use serde::{Deserialize, Serialize};

/// Scan direction of the run-length matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Along rows.
    Deg0,
    /// Along anti-diagonals (bottom-left to top-right).
    Deg45,
    /// Along columns.
    Deg90,
    /// Along main diagonals (top-left to bottom-right).
    Deg135,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Deg0,
        Direction::Deg45,
        Direction::Deg90,
        Direction::Deg135,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Direction::Deg0 => "deg0",
            Direction::Deg45 => "deg45",
            Direction::Deg90 => "deg90",
            Direction::Deg135 => "deg135",
        }
    }

    /// Pixel step `(dx, dy)` along a line, `y` pointing down.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Deg0 => (1, 0),
            Direction::Deg45 => (1, -1),
            Direction::Deg90 => (0, 1),
            Direction::Deg135 => (1, 1),
        }
    }

    /// First pixel of every line covering a `w × h` image.
    fn line_starts(self, w: usize, h: usize) -> Vec<(usize, usize)> {
        if w == 0 || h == 0 {
            return Vec::new();
        }
        match self {
            Direction::Deg0 => (0..h).map(|y| (0, y)).collect(),
            Direction::Deg90 => (0..w).map(|x| (x, 0)).collect(),
            // Left column, then the bottom row.
            Direction::Deg45 => (0..h)
                .map(|y| (0, y))
                .chain((1..w).map(|x| (x, h - 1)))
                .collect(),
            // Left column bottom-up, then the top row.
            Direction::Deg135 => (0..h)
                .rev()
                .map(|y| (0, y))
                .chain((1..w).map(|x| (x, 0)))
                .collect(),
        }
    }

    /// Number of lines scanned over a `w × h` image.
    pub fn line_count(self, w: usize, h: usize) -> usize {
        self.line_starts(w, h).len()
    }
}

/// Run counts indexed by (gray level − image minimum, run length − 1).
///
/// The gray axis spans `max − min + 1` levels of the image and the run axis
/// `max(width, height)` lengths.
#[derive(Clone, Debug, PartialEq)]
pub struct RunLengthMatrix {
    levels: usize,
    max_run: usize,
    min_level: u8,
    counts: Vec<u64>,
}

impl RunLengthMatrix {
    /// Count the maximal runs of equal values along `dir`.
    pub fn compute(gray: ImageU8<'_>, dir: Direction) -> Self {
        let (w, h) = (gray.w, gray.h);
        let mut min_level = u8::MAX;
        let mut max_level = u8::MIN;
        gray.for_each_pixel(|v| {
            min_level = min_level.min(v);
            max_level = max_level.max(v);
        });
        if w == 0 || h == 0 {
            return Self {
                levels: 0,
                max_run: 0,
                min_level: 0,
                counts: Vec::new(),
            };
        }

        let levels = usize::from(max_level - min_level) + 1;
        let max_run = w.max(h);
        let mut matrix = Self {
            levels,
            max_run,
            min_level,
            counts: vec![0; levels * max_run],
        };

        let (dx, dy) = dir.step();
        for (x0, y0) in dir.line_starts(w, h) {
            let (mut x, mut y) = (x0 as isize, y0 as isize);
            let mut current = gray.get(x0, y0);
            let mut run = 0usize;
            while x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                let v = gray.get(x as usize, y as usize);
                if v == current {
                    run += 1;
                } else {
                    matrix.record(current, run);
                    current = v;
                    run = 1;
                }
                x += dx;
                y += dy;
            }
            matrix.record(current, run);
        }
        matrix
    }

    fn record(&mut self, value: u8, run: usize) {
        let level = usize::from(value - self.min_level);
        self.counts[level * self.max_run + run - 1] += 1;
    }

    /// Number of gray levels on the first axis.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Longest representable run.
    pub fn max_run(&self) -> usize {
        self.max_run
    }

    /// Intensity that maps to relative level 0.
    pub fn min_level(&self) -> u8 {
        self.min_level
    }

    /// Count of runs at relative `level` with length `run` (1-based).
    pub fn get(&self, level: usize, run: usize) -> u64 {
        self.counts[level * self.max_run + run - 1]
    }

    /// Rows of the matrix, one per relative gray level.
    pub fn level_rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.counts.chunks_exact(self.max_run.max(1))
    }

    pub fn total_runs(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Pixels covered by all runs (`Σ count · length`).
    pub fn total_pixels(&self) -> u64 {
        self.level_rows()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, &c)| c * (j as u64 + 1))
                    .sum::<u64>()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    fn image(w: usize, h: usize, data: &[u8]) -> GrayImageU8 {
        GrayImageU8::from_raw(w, h, data.to_vec()).unwrap()
    }

    /// Reference count of maximal runs along explicit pixel lines.
    fn count_runs(lines: &[Vec<u8>]) -> u64 {
        lines
            .iter()
            .map(|line| 1 + line.windows(2).filter(|p| p[0] != p[1]).count() as u64)
            .sum()
    }

    #[test]
    fn horizontal_runs_are_counted_per_level() {
        let img = image(4, 2, &[5, 5, 6, 6, 7, 5, 5, 5]);
        let m = RunLengthMatrix::compute(img.as_view(), Direction::Deg0);
        assert_eq!(m.levels(), 3);
        assert_eq!(m.max_run(), 4);
        assert_eq!(m.min_level(), 5);
        assert_eq!(m.get(0, 2), 1); // "5 5" in row 0
        assert_eq!(m.get(1, 2), 1); // "6 6"
        assert_eq!(m.get(2, 1), 1); // "7"
        assert_eq!(m.get(0, 3), 1); // "5 5 5" in row 1
        assert_eq!(m.total_runs(), 4);
        assert_eq!(m.total_pixels(), 8);
    }

    #[test]
    fn diagonal_lines_cover_every_pixel_once() {
        let (w, h) = (5usize, 3usize);
        let data: Vec<u8> = (0..(w * h) as u8).collect();
        let img = image(w, h, &data);
        for dir in Direction::ALL {
            let m = RunLengthMatrix::compute(img.as_view(), dir);
            // All pixels distinct: every pixel is a run of length one.
            assert_eq!(m.total_runs(), (w * h) as u64, "{dir:?}");
            assert_eq!(m.total_pixels(), (w * h) as u64, "{dir:?}");
        }
        assert_eq!(Direction::Deg0.line_count(w, h), h);
        assert_eq!(Direction::Deg90.line_count(w, h), w);
        assert_eq!(Direction::Deg45.line_count(w, h), w + h - 1);
        assert_eq!(Direction::Deg135.line_count(w, h), w + h - 1);
    }

    #[test]
    fn run_totals_match_reference_scan() {
        // 3x3:
        // 1 1 2
        // 3 1 2
        // 3 3 1
        let img = image(3, 3, &[1, 1, 2, 3, 1, 2, 3, 3, 1]);
        let at = |x: usize, y: usize| img.get(x, y);

        let rows: Vec<Vec<u8>> = (0..3).map(|y| (0..3).map(|x| at(x, y)).collect()).collect();
        let cols: Vec<Vec<u8>> = (0..3).map(|x| (0..3).map(|y| at(x, y)).collect()).collect();
        let anti: Vec<Vec<u8>> = (0..5usize)
            .map(|s| {
                (0..3)
                    .filter_map(|x: usize| s.checked_sub(x).filter(|&y| y < 3).map(|y| at(x, y)))
                    .collect()
            })
            .collect();
        let main: Vec<Vec<u8>> = (-2isize..=2)
            .map(|d| {
                (0..3isize)
                    .filter_map(|x| {
                        let y = x - d;
                        (0..3).contains(&y).then(|| at(x as usize, y as usize))
                    })
                    .collect()
            })
            .collect();

        let cases = [
            (Direction::Deg0, rows),
            (Direction::Deg45, anti),
            (Direction::Deg90, cols),
            (Direction::Deg135, main),
        ];
        for (dir, lines) in cases {
            let m = RunLengthMatrix::compute(img.as_view(), dir);
            let expected = count_runs(&lines);
            assert_eq!(m.total_runs(), expected, "{dir:?}");
            assert!(m.total_runs() <= 9);
            assert!(m.total_runs() >= dir.line_count(3, 3) as u64);
            assert_eq!(m.total_pixels(), 9);
        }

        // The main diagonal 1 1 1 forms a single run of three.
        let m = RunLengthMatrix::compute(img.as_view(), Direction::Deg135);
        assert_eq!(m.get(0, 3), 1);
    }

    #[test]
    fn matrices_are_independent_per_direction() {
        let img = image(2, 2, &[0, 0, 1, 1]);
        let h = RunLengthMatrix::compute(img.as_view(), Direction::Deg0);
        let v = RunLengthMatrix::compute(img.as_view(), Direction::Deg90);
        assert_eq!(h.total_runs(), 2);
        assert_eq!(v.total_runs(), 4);
        assert_eq!(h.get(0, 2), 1);
        assert_eq!(v.get(0, 1), 2);
    }
}
