use serde::{Deserialize, Serialize};

/// Row-major `f32` matrix.
///
/// Vectors are column vectors of shape `[n, 1]`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Mat {
    pub data: Vec<f32>,
    pub shape: [usize; 2],
}

impl Mat {
    pub fn new(data: Vec<f32>, shape: [usize; 2]) -> Self {
        assert_eq!(
            data.len(),
            shape[0] * shape[1],
            "Data of length {} does not fit shape {:?}",
            data.len(),
            shape
        );
        Self { data, shape }
    }

    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    pub fn matmul(&self, x: &Mat) -> Self {
        let (m, l, n) = (self.shape[0], self.shape[1], x.shape[1]);
        if l != x.shape[0] {
            panic!(
                "Trying to multiply matrices of incompatible sizes: {:?}",
                (&self.shape, &x.shape)
            );
        }

        let mut data = vec![0.0f32; m * n];
        for i in 0..m {
            for j in 0..n {
                let kk = i * n + j;
                for k in 0..l {
                    data[kk] += self.data[i * l + k] * x.data[k * n + j];
                }
            }
        }

        Self {
            shape: [m, n],
            data,
        }
    }

    pub fn add(&self, x: &Mat) -> Self {
        if self.shape != x.shape {
            panic!(
                "Trying to add matrices of different sizes: {:?}",
                (&self.shape, &x.shape)
            );
        }

        let data = self
            .data
            .iter()
            .zip(x.data.iter())
            .map(|(a, b)| *a + *b)
            .collect();

        Mat {
            data,
            shape: self.shape,
        }
    }

    pub fn relu(&self) -> Self {
        self.map(|a| a.max(0.))
    }

    pub fn tanh(&self) -> Self {
        self.map(f32::tanh)
    }

    /// Multiplies every element by `s`.
    pub fn scale(&self, s: f32) -> Self {
        self.map(|a| a * s)
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            data: self.data.iter().map(|a| f(*a)).collect(),
            shape: self.shape,
        }
    }
}

impl From<Vec<f32>> for Mat {
    fn from(x: Vec<f32>) -> Self {
        let shape = [x.len(), 1];
        Self { shape, data: x }
    }
}

impl From<Mat> for Vec<f32> {
    fn from(x: Mat) -> Self {
        x.data
    }
}
