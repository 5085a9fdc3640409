use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand, ValueEnum};
    use hypatia::{
        Float, fhy,
        matrix::{Matrix3, Matrix4, MatrixLayout},
        quaternion::UnitQuaternion,
        random,
        reference::{
            ReferenceVector2, ReferenceVector3, ReferenceVector4, reference_vector2,
            reference_vector3, reference_vector4,
        },
    };
    use rand::{SeedableRng, rngs::StdRng};

    #[derive(Debug, Parser)]
    #[command(about = "Diagnostics for the Hypatia geometry kernel", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the table of reference vectors
        Reference,
        /// Print a randomly generated value
        Random {
            /// Kind of value to generate
            #[arg(short, long, value_enum)]
            kind: Kind,

            /// Seed for the random number generator (a random seed is used if
            /// omitted)
            #[arg(short, long)]
            seed: Option<u64>,

            /// Order in which to print matrix elements
            #[arg(short, long, value_enum, default_value_t = Layout::RowMajor)]
            layout: Layout,
        },
        /// Convert random rotations to matrices and back, and report the
        /// largest deviation from the original quaternion
        RoundTrip {
            /// Seed for the random number generator (a random seed is used if
            /// omitted)
            #[arg(short, long)]
            seed: Option<u64>,

            /// Number of rotations to convert
            #[arg(short, long, default_value_t = 1000)]
            count: usize,
        },
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum Kind {
        Vector2,
        Vector3,
        Vector4,
        Matrix3,
        Matrix4,
        Quaternion,
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum Layout {
        RowMajor,
        ColumnMajor,
    }

    impl From<Layout> for MatrixLayout {
        fn from(layout: Layout) -> Self {
            match layout {
                Layout::RowMajor => Self::RowMajor,
                Layout::ColumnMajor => Self::ColumnMajor,
            }
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Reference => {
                print_reference_vectors();
                Ok(())
            }
            Command::Random { kind, seed, layout } => {
                print_random_value(kind, create_rng(seed), layout.into());
                Ok(())
            }
            Command::RoundTrip { seed, count } => run_round_trip(create_rng(seed), count),
        }
    }

    fn create_rng(seed: Option<u64>) -> StdRng {
        let seed = seed.unwrap_or_else(rand::random);
        log::info!("Using random seed {seed}");
        StdRng::seed_from_u64(seed)
    }

    fn print_reference_vectors() {
        for id in ReferenceVector2::ALL {
            println!("{id:?}2 = {}", reference_vector2(id));
        }
        for id in ReferenceVector3::ALL {
            println!("{id:?}3 = {}", reference_vector3(id));
        }
        for id in ReferenceVector4::ALL {
            println!("{id:?}4 = {}", reference_vector4(id));
        }
    }

    fn print_random_value(kind: Kind, mut rng: StdRng, layout: MatrixLayout) {
        match kind {
            Kind::Vector2 => println!("{}", random::vector2::<fhy, _>(&mut rng)),
            Kind::Vector3 => println!("{}", random::vector3::<fhy, _>(&mut rng)),
            Kind::Vector4 => println!("{}", random::vector4::<fhy, _>(&mut rng)),
            Kind::Matrix3 => {
                let matrix: Matrix3<fhy> = random::matrix3(&mut rng);
                println!("{}", matrix.display(layout));
            }
            Kind::Matrix4 => {
                let matrix: Matrix4<fhy> = random::matrix4(&mut rng);
                println!("{}", matrix.display(layout));
            }
            Kind::Quaternion => println!("{}", random::quaternion::<fhy, _>(&mut rng)),
        }
    }

    fn run_round_trip(mut rng: StdRng, count: usize) -> Result<()> {
        let mut max_deviation: fhy = 0.0;

        for _ in 0..count {
            let rotation: UnitQuaternion<fhy> = random::unit_quaternion(&mut rng);
            let converted = UnitQuaternion::from_rotation_matrix(&rotation.to_rotation_matrix())?;

            // `q` and `-q` describe the same rotation
            let original = rotation.as_quaternion();
            let converted = converted.as_quaternion();
            let deviation = (converted - original)
                .magnitude()
                .min((converted + original).magnitude());

            max_deviation = max_deviation.max(deviation);
        }

        println!("Converted {count} rotations, maximum deviation {max_deviation:e}");

        if max_deviation > fhy::EQUALITY_EPSILON {
            log::warn!(
                "Maximum deviation exceeds the equality epsilon {:e}",
                fhy::EQUALITY_EPSILON
            );
        }

        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
