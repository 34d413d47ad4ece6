use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spelling_maze::{ascii, Generator, Maze, MazeError, WordEmbedder, DEFAULT_BRANCH_CHANCE};

/// Génère un labyrinthe dont la solution épelle un mot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Le mot à cacher le long du chemin solution (lettres a-z)
    word: String,

    /// Largeur de la grille, en cellules
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Hauteur de la grille, en cellules
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Graine aléatoire, pour une génération reproductible
    #[arg(long)]
    seed: Option<u64>,

    /// Probabilité d'ouvrir une sortie vers chaque voisin pendant le creusement
    #[arg(long, default_value_t = DEFAULT_BRANCH_CHANCE)]
    branch_chance: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.branch_chance),
        "--branch-chance doit être une probabilité entre 0 et 1"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let generator = Generator::new(args.branch_chance);
    let mut maze = Maze::generate(
        usize::from(args.width),
        usize::from(args.height),
        &generator,
        &mut rng,
    )?;

    let word = args.word.to_lowercase();
    let embedder = WordEmbedder::new(generator);
    match embedder.embed(&mut maze, &word, &mut rng) {
        Ok(_) => {}
        // Le labyrinthe reste valide : on l'imprime sans le mot.
        Err(error @ MazeError::NotEnoughJunctions { .. }) => eprintln!("{error}"),
        Err(error) => return Err(error.into()),
    }

    print!("{}", ascii::render(&maze));
    Ok(())
}
