use ferrite_mlp::{train_loop, Network, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> ferrite_mlp::Result<()> {
    tracing_subscriber::fmt::init();

    let mut rng = StdRng::seed_from_u64(7);
    let mut network = Network::new(2, 4, 1, 0.5, &mut rng)?;

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    let config = TrainConfig::new(10000).with_log_every(1000);
    let loss = train_loop(&mut network, &inputs, &expected_outputs, &config)?;
    if let Some(loss) = loss {
        println!("Final loss = {loss:.6}");
    }

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.forward(input)?[0]);
    }
    Ok(())
}
