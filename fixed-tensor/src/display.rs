use super::*;
use std::fmt;

const DEFAULT_PRECISION: usize = 6;

fn write_row<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    row: &[T],
    precision: usize,
) -> fmt::Result {
    f.write_str("| ")?;
    for value in row {
        write!(f, "{value:.precision$} ")?;
    }
    f.write_str("|")
}

/// Renders the tensor as bracketed rows, one line per row for matrices and one line per outer index for
/// rank 3. Values use the formatter's precision, six decimals by default; integers ignore it.
///
/// Only tensors up to rank 3 can be displayed, a higher rank fails the build.
impl<T: fmt::Display, const R: usize, const S: usize> fmt::Display for Tensor<T, R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::assert_printable();

        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        let data = self.storage.as_slice();
        let shape: &[usize] = &self.shape;

        match *shape {
            [] => {
                if let Some(value) = data.first() {
                    writeln!(f, "{value:.precision$}")?;
                }
            }
            [_] => {
                write_row(f, data, precision)?;
                writeln!(f)?;
            }
            [_, cols] => {
                for row in data.chunks(cols) {
                    write_row(f, row, precision)?;
                    writeln!(f)?;
                }
            }
            [_, rows, cols] => {
                for matrix in data.chunks(rows * cols) {
                    for row in matrix.chunks(cols) {
                        write_row(f, row, precision)?;
                        f.write_str(" ")?;
                    }
                    writeln!(f)?;
                }
            }
            _ => unreachable!("rank is limited at compile time"),
        }

        Ok(())
    }
}

impl<T, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Fails the build when tensors of rank `R` cannot be printed.
    pub const fn assert_printable() {
        const { assert!(R <= 3, "printing is only supported for tensors with rank <= 3") };
    }
}

impl<T: fmt::Display, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Prints the tensor to stdout with six decimals.
    ///
    /// ```
    /// use fixed_tensor::Tensor;
    ///
    /// let cube = Tensor::<i32, 3, 8>::new();
    /// assert_eq!(cube.to_string(), "| 0 0 | | 0 0 | \n| 0 0 | | 0 0 | \n");
    /// cube.print();
    /// ```
    ///
    /// Tensors above rank 3 have no printed form:
    ///
    /// ```compile_fail
    /// use fixed_tensor::Tensor;
    ///
    /// const _: () = Tensor::<i32, 4, 16>::assert_printable();
    /// Tensor::<i32, 4, 16>::new().print();
    /// ```
    pub fn print(&self) {
        print!("{self}");
    }

    pub fn print_with_precision(&self, precision: usize) {
        print!("{self:.precision$}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalar() {
        let scalar = Tensor::<i32, 0, 1>::new();
        assert_eq!(scalar.to_string(), "0\n");

        let scalar = Tensor::<f64, 0, 1>::filled(2.5);
        assert_eq!(scalar.to_string(), "2.500000\n");
        assert_eq!(format!("{scalar:.2}"), "2.50\n");
    }

    #[test]
    fn test_display_vector() {
        let vector = Tensor::<f32, 1, 3>::filled(1.0);
        assert_eq!(vector.to_string(), "| 1.000000 1.000000 1.000000 |\n");
        assert_eq!(format!("{vector:.1}"), "| 1.0 1.0 1.0 |\n");
    }

    #[test]
    fn test_display_matrix() -> Result<()> {
        let matrix = Tensor::<i32, 2, 6>::from_vec((1..=6).collect(), &[2, 3])?;
        assert_eq!(matrix.to_string(), "| 1 2 3 |\n| 4 5 6 |\n");

        let matrix = Tensor::<f32, 2, 4>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2])?;
        assert_eq!(format!("{matrix:.0}"), "| 1 2 |\n| 3 4 |\n");

        Ok(())
    }

    #[test]
    fn test_display_rank3() -> Result<()> {
        let tensor = Tensor::<i32, 3, 8>::from_vec((0..8).collect(), &[2, 2, 2])?;
        assert_eq!(tensor.to_string(), "| 0 1 | | 2 3 | \n| 4 5 | | 6 7 | \n");

        let tensor = Tensor::<i32, 3, 12>::from_vec((0..12).collect(), &[3, 2, 2])?;
        assert_eq!(
            tensor.to_string(),
            "| 0 1 | | 2 3 | \n| 4 5 | | 6 7 | \n| 8 9 | | 10 11 | \n"
        );

        Ok(())
    }
}
