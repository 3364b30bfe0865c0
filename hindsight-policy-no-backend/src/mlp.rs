use crate::Mat;
use hindsight_core::error::HindsightError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Multilayer perceptron with ReLU activation function and `tanh` output.
pub struct Mlp {
    /// Weights of layers, `[out, in]`.
    ws: Vec<Mat>,

    /// Biases of layers, `[out, 1]`.
    bs: Vec<Mat>,
}

impl Mlp {
    pub fn forward(&self, x: &Mat) -> Mat {
        let n_layers = self.ws.len();
        let mut x = x.clone();
        for i in 0..n_layers {
            x = self.ws[i].matmul(&x).add(&self.bs[i]);
            if i != n_layers - 1 {
                x = x.relu();
            }
        }
        x.tanh()
    }

    /// Builds the network from named parameters.
    ///
    /// Layers are taken in the order of `w_names` and `b_names`. Fails if a name is missing, the
    /// data of a parameter does not fill its shape or the shapes of consecutive layers do not
    /// chain.
    pub fn from_named(
        params: &BTreeMap<String, Mat>,
        w_names: &[&str],
        b_names: &[&str],
    ) -> Result<Self, HindsightError> {
        if w_names.is_empty() || w_names.len() != b_names.len() {
            return Err(HindsightError::Checkpoint(format!(
                "{} weights and {} biases given",
                w_names.len(),
                b_names.len()
            )));
        }

        let get = |name: &str| {
            params.get(name).cloned().ok_or_else(|| {
                HindsightError::Checkpoint(format!("Parameter {} not found", name))
            })
        };
        let ws = w_names.iter().map(|n| get(*n)).collect::<Result<Vec<_>, _>>()?;
        let bs = b_names.iter().map(|n| get(*n)).collect::<Result<Vec<_>, _>>()?;

        let names = w_names.iter().chain(b_names.iter());
        for (name, m) in names.zip(ws.iter().chain(bs.iter())) {
            let [rows, cols] = m.shape();
            if m.data.len() != rows * cols {
                return Err(HindsightError::Checkpoint(format!(
                    "{} has shape {:?} but {} elements",
                    name,
                    m.shape(),
                    m.data.len()
                )));
            }
        }

        for (i, (w, b)) in ws.iter().zip(bs.iter()).enumerate() {
            if b.shape() != [w.shape()[0], 1] {
                return Err(HindsightError::Checkpoint(format!(
                    "{} has shape {:?}, expected [{}, 1]",
                    b_names[i],
                    b.shape(),
                    w.shape()[0]
                )));
            }
            if i > 0 && w.shape()[1] != ws[i - 1].shape()[0] {
                return Err(HindsightError::Checkpoint(format!(
                    "{} takes {} inputs but {} has {} outputs",
                    w_names[i],
                    w.shape()[1],
                    w_names[i - 1],
                    ws[i - 1].shape()[0]
                )));
            }
        }

        Ok(Self { ws, bs })
    }

    /// Dimension of the input.
    pub fn input_dim(&self) -> usize {
        self.ws[0].shape()[1]
    }

    /// Dimension of the output.
    pub fn output_dim(&self) -> usize {
        self.ws[self.ws.len() - 1].shape()[0]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn params() -> BTreeMap<String, Mat> {
        let mut params = BTreeMap::new();
        params.insert("l1.weight".to_string(), Mat::new(vec![1.0, -1.0], [1, 2]));
        params.insert("l1.bias".to_string(), Mat::new(vec![0.5], [1, 1]));
        params.insert("l2.weight".to_string(), Mat::new(vec![1.0, 2.0], [2, 1]));
        params.insert("l2.bias".to_string(), Mat::new(vec![0.0, 0.0], [2, 1]));
        params
    }

    #[test]
    fn test_forward() {
        let mlp = Mlp::from_named(&params(), &["l1.weight", "l2.weight"], &["l1.bias", "l2.bias"])
            .unwrap();
        assert_eq!(mlp.input_dim(), 2);
        assert_eq!(mlp.output_dim(), 2);

        // Hidden pre-activation is 0.5 + 1 - 3 = -1.5, cut to zero by ReLU.
        let y = mlp.forward(&vec![1.0, 3.0].into());
        assert_eq!(y.data, vec![0.0, 0.0]);

        // Hidden activation 0.5 + 2 = 2.5.
        let y = mlp.forward(&vec![2.0, 0.0].into());
        assert!((y.data[0] - 2.5f32.tanh()).abs() < 1e-6);
        assert!((y.data[1] - 5.0f32.tanh()).abs() < 1e-6);
    }

    #[test]
    fn test_missing_parameter() {
        let r = Mlp::from_named(&params(), &["l1.weight", "l3.weight"], &["l1.bias", "l2.bias"]);
        assert!(r.is_err());
    }

    #[test]
    fn test_shapes_do_not_chain() {
        let mut params = params();
        params.insert("l2.weight".to_string(), Mat::new(vec![1.0, 2.0], [1, 2]));
        params.insert("l2.bias".to_string(), Mat::new(vec![0.0], [1, 1]));
        let r = Mlp::from_named(&params, &["l1.weight", "l2.weight"], &["l1.bias", "l2.bias"]);
        assert!(r.is_err());
    }

    #[test]
    fn test_data_does_not_fill_shape() {
        let mut params = params();
        params.get_mut("l2.weight").unwrap().data.truncate(1);
        let r = Mlp::from_named(&params, &["l1.weight", "l2.weight"], &["l1.bias", "l2.bias"]);
        assert!(matches!(r, Err(HindsightError::Checkpoint(_))));
    }
}
