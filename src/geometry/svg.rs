use crate::error::{PathError, Result, SquircleError};
use crate::math::{Point2, TOLERANCE};

use super::cubic::CubicBezier;
use super::path::{Path, PathSegment};

/// A single absolute SVG path-data command.
///
/// Only the absolute forms used by the slider shapes are modeled:
/// move-to, line-to, cubic-curve-to, elliptical-arc and close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SvgCommand {
    /// `M x y`
    MoveTo(Point2),
    /// `L x y`
    LineTo(Point2),
    /// `C x1 y1 x2 y2 x y`
    CubicTo {
        /// First control point.
        control1: Point2,
        /// Second control point.
        control2: Point2,
        /// End point.
        end: Point2,
    },
    /// `A rx ry rotation large-arc sweep x y`
    Arc {
        /// X-axis radius.
        rx: f64,
        /// Y-axis radius.
        ry: f64,
        /// Rotation of the ellipse axes, in degrees.
        rotation: f64,
        /// Large-arc flag.
        large_arc: bool,
        /// Sweep flag.
        sweep: bool,
        /// End point.
        end: Point2,
    },
    /// `Z`
    Close,
}

/// Parses absolute SVG path data into commands.
///
/// Repeated argument groups without a repeated command letter follow the
/// SVG convention (extra pairs after `M` become line-tos). Relative
/// commands and the shorthand curve forms are not supported.
///
/// # Errors
///
/// Returns an error on unsupported commands, malformed numbers, truncated
/// argument lists, or data with no commands at all.
pub fn parse_path_data(data: &str) -> Result<Vec<SvgCommand>> {
    let mut scanner = Scanner::new(data);
    let mut commands = Vec::new();
    let mut op: Option<char> = None;
    let mut first_group = false;

    loop {
        scanner.skip_separators();
        let Some(next) = scanner.peek() else { break };

        if next.is_ascii_alphabetic() {
            scanner.advance();
            match next {
                'M' | 'L' | 'C' | 'A' => {
                    op = Some(next);
                    first_group = true;
                    continue;
                }
                'Z' | 'z' => {
                    commands.push(SvgCommand::Close);
                    op = None;
                    continue;
                }
                other => return Err(PathError::UnsupportedCommand(other).into()),
            }
        }

        let Some(cmd) = op else {
            return Err(PathError::UnsupportedCommand(next).into());
        };
        match cmd {
            'M' => {
                let p = scanner.point(cmd)?;
                if first_group {
                    commands.push(SvgCommand::MoveTo(p));
                } else {
                    commands.push(SvgCommand::LineTo(p));
                }
            }
            'L' => {
                let p = scanner.point(cmd)?;
                commands.push(SvgCommand::LineTo(p));
            }
            'C' => {
                let control1 = scanner.point(cmd)?;
                let control2 = scanner.point(cmd)?;
                let end = scanner.point(cmd)?;
                commands.push(SvgCommand::CubicTo {
                    control1,
                    control2,
                    end,
                });
            }
            'A' => {
                let rx = scanner.number(cmd)?;
                let ry = scanner.number(cmd)?;
                let rotation = scanner.number(cmd)?;
                let large_arc = scanner.number(cmd)? >= 0.5;
                let sweep = scanner.number(cmd)? >= 0.5;
                let end = scanner.point(cmd)?;
                commands.push(SvgCommand::Arc {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    end,
                });
            }
            other => return Err(PathError::UnsupportedCommand(other).into()),
        }
        first_group = false;
    }

    if commands.is_empty() {
        return Err(PathError::Empty.into());
    }
    Ok(commands)
}

/// Builds a [`Path`] from parsed commands.
///
/// The command list must describe a single subpath of lines and cubic
/// curves. `Z` closes the subpath with a straight segment back to the
/// move-to point when the pen is not already there.
///
/// # Errors
///
/// Returns an error for elliptical arcs, drawing commands before the
/// initial move-to, more than one subpath, or an empty subpath.
pub fn commands_to_path(commands: &[SvgCommand]) -> Result<Path> {
    let mut segments = Vec::new();
    let mut current: Option<Point2> = None;
    let mut subpath_start: Option<Point2> = None;

    for command in commands {
        match *command {
            SvgCommand::MoveTo(p) => {
                if !segments.is_empty() {
                    return Err(PathError::MultipleSubpaths.into());
                }
                current = Some(p);
                subpath_start = Some(p);
            }
            SvgCommand::LineTo(p) => {
                let start = current.ok_or(PathError::MissingMoveTo)?;
                segments.push(PathSegment::Line { start, end: p });
                current = Some(p);
            }
            SvgCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                let start = current.ok_or(PathError::MissingMoveTo)?;
                segments.push(PathSegment::Cubic(CubicBezier::new(
                    start, control1, control2, end,
                )));
                current = Some(end);
            }
            SvgCommand::Arc { .. } => {
                return Err(PathError::UnsupportedCommand('A').into());
            }
            SvgCommand::Close => {
                if let (Some(p), Some(start)) = (current, subpath_start) {
                    if (p - start).norm() > TOLERANCE {
                        segments.push(PathSegment::Line {
                            start: p,
                            end: start,
                        });
                    }
                    current = Some(start);
                }
            }
        }
    }

    if segments.is_empty() {
        return Err(PathError::Empty.into());
    }
    Path::new(segments)
}

/// Writes commands back out as SVG path data.
#[must_use]
pub fn write_path_data(commands: &[SvgCommand]) -> String {
    let mut out = String::new();
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match *command {
            SvgCommand::MoveTo(p) => out.push_str(&format!("M {} {}", p.x, p.y)),
            SvgCommand::LineTo(p) => out.push_str(&format!("L {} {}", p.x, p.y)),
            SvgCommand::CubicTo {
                control1,
                control2,
                end,
            } => out.push_str(&format!(
                "C {} {} {} {} {} {}",
                control1.x, control1.y, control2.x, control2.y, end.x, end.y
            )),
            SvgCommand::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                end,
            } => out.push_str(&format!(
                "A {rx} {ry} {rotation} {} {} {} {}",
                u8::from(large_arc),
                u8::from(sweep),
                end.x,
                end.y
            )),
            SvgCommand::Close => out.push('Z'),
        }
    }
    out
}

/// Cursor over path data; commands are single ASCII letters and numbers
/// may be separated by whitespace, commas, or nothing at all before a sign.
struct Scanner<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a str) -> Self {
        Self { data, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.data.as_bytes().get(self.pos).map(|&b| b as char)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.as_bytes().get(self.pos) {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn number(&mut self, cmd: char) -> Result<f64> {
        self.skip_separators();
        let bytes = self.data.as_bytes();
        if self.pos >= bytes.len() {
            return Err(PathError::UnexpectedEnd(cmd).into());
        }

        let start = self.pos;
        if matches!(bytes[self.pos], b'+' | b'-') {
            self.pos += 1;
        }
        while self.pos < bytes.len() && (bytes[self.pos].is_ascii_digit() || bytes[self.pos] == b'.')
        {
            self.pos += 1;
        }
        if self.pos < bytes.len() && matches!(bytes[self.pos], b'e' | b'E') {
            self.pos += 1;
            if self.pos < bytes.len() && matches!(bytes[self.pos], b'+' | b'-') {
                self.pos += 1;
            }
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }

        let text = &self.data[start..self.pos];
        text.parse()
            .map_err(|_| SquircleError::from(PathError::InvalidNumber(text.to_string())))
    }

    fn point(&mut self, cmd: char) -> Result<Point2> {
        let x = self.number(cmd)?;
        let y = self.number(cmd)?;
        Ok(Point2::new(x, y))
    }
}
