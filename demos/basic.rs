use smartvector::{DenseVector, InnerProductSpace, SparseVector, VError, dvec, svec};

fn main() -> Result<(), VError> {
    let a = dvec![1.0f64, 2.0, 3.0];
    let b = dvec![4.0, 5.0, 6.0];
    println!("{a} + {b} = {}", (&a + &b)?);
    println!("{a} . {b} = {}", (&a * &b)?);
    println!("2 * {a} = {}", 2.0 * &a);

    let s = svec![1.0f64, 0.0, 3.0];
    let t = svec![0.0, 2.0, 0.0];
    let sum = (&s + &t)?;
    println!("{s} + {t} = {sum} (stored entries: {})", sum.nnz());
    println!("dense form: {}", DenseVector::from(&sum));
    println!("|{sum}| = {}", sum.norm());

    let zeroed = 0.0 * &sum;
    println!("0 * {sum} = {zeroed} (stored entries: {})", zeroed.nnz());

    let short = SparseVector::<f64>::zeros(4);
    if let Err(e) = &sum + &short {
        println!("{e}");
    }
    Ok(())
}
