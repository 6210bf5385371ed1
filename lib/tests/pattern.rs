use ledlife_lib::{
    lookup,
    pattern::CAROUSEL,
    seed, Error, Grid, Orientation, Placement, SeedRequest, ALIVE, DEAD,
};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;

#[test]
fn lookup_names() {
    for name in ["frogger", "clapper", "blinkers", "nova", "bullseye", "glider", "void"] {
        assert_eq!(lookup(name).map(|p| p.name), Some(name));
    }
    assert!(lookup("random").is_none());
    assert!(lookup("carousel").is_none());
    assert!(lookup("pulsar").is_none());
    assert_eq!(lookup("void").map(|p| p.population()), Some(0));
    assert_eq!(lookup("glider").map(|p| p.population()), Some(5));
}

#[test]
fn requests() {
    assert_eq!(SeedRequest::from("random"), SeedRequest::Random);
    assert_eq!(SeedRequest::from("carousel"), SeedRequest::Carousel);
    assert_eq!(
        SeedRequest::from("nova"),
        SeedRequest::Pattern(lookup("nova").unwrap())
    );
    assert_eq!(
        SeedRequest::from("Glider"),
        SeedRequest::Unknown(String::from("Glider"))
    );
    assert_eq!(SeedRequest::from("bullseye").to_string(), "bullseye");
}

#[test]
fn carousel_catalog() {
    assert_eq!(CAROUSEL.len(), 7);
    for name in CAROUSEL {
        assert!(!matches!(
            SeedRequest::from(name),
            SeedRequest::Carousel | SeedRequest::Unknown(_)
        ));
        assert_ne!(name, "void");
    }
}

#[test]
fn display_pattern() {
    assert_eq!(
        lookup("glider").unwrap().to_string(),
        "........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         .OO.....\n\
         O.O.....\n\
         ..O.....\n"
    );
}

#[test]
fn orientation_strings() {
    for orientation in Orientation::ALL {
        assert_eq!(orientation.to_string().parse(), Ok(orientation));
        assert_eq!(
            orientation.index().to_string().parse::<Orientation>(),
            Ok(orientation)
        );
        assert_eq!(Orientation::from_index(orientation.index()), Some(orientation));
    }
    assert!("R90".parse::<Orientation>().is_err());
    assert_eq!(Orientation::from_index(4), None);
}

#[test]
fn orientation_source() {
    assert_eq!(Orientation::Id.source(1, 2), (1, 2));
    assert_eq!(Orientation::FlipCol.source(1, 2), (1, 5));
    assert_eq!(Orientation::FlipRow.source(1, 2), (6, 2));
    assert_eq!(Orientation::Rotate180.source(1, 2), (6, 5));
}

#[test]
fn apply_orientations() -> Result<(), Error> {
    let glider = lookup("glider").unwrap();
    let mut grid = Grid::new(8, 8)?;

    glider.apply(&mut grid, Orientation::Id, 0, 0);
    assert_eq!(grid.get(6, 0), ALIVE);
    assert_eq!(grid.get(5, 1), ALIVE);

    glider.apply(&mut grid, Orientation::FlipCol, 0, 0);
    assert_eq!(grid.get(6, 7), ALIVE);
    assert_eq!(grid.get(6, 0), DEAD);

    glider.apply(&mut grid, Orientation::FlipRow, 0, 0);
    assert_eq!(grid.get(1, 0), ALIVE);
    assert_eq!(grid.get(2, 6), DEAD);

    glider.apply(&mut grid, Orientation::Rotate180, 0, 0);
    assert_eq!(grid.get(1, 7), ALIVE);
    assert_eq!(grid.get(0, 5), ALIVE);
    assert_eq!(grid.population(), 5);
    Ok(())
}

#[test]
fn apply_clips() -> Result<(), Error> {
    let mut grid = Grid::new(4, 5)?;
    lookup("blinkers")
        .unwrap()
        .apply(&mut grid, Orientation::Id, 0, 0);
    assert_eq!(grid.population(), 3);
    assert!(grid.is_border_clear());
    Ok(())
}

#[test]
fn placement() -> Result<(), Error> {
    assert_eq!(Placement::Origin.origin(&Grid::new(8, 16)?), (0, 0));
    assert_eq!(Placement::Centered.origin(&Grid::new(8, 16)?), (0, 4));
    assert_eq!(Placement::Centered.origin(&Grid::new(17, 16)?), (4, 4));
    assert_eq!(Placement::Centered.origin(&Grid::new(4, 4)?), (0, 0));
    assert_eq!("origin".parse(), Ok(Placement::Origin));
    assert_eq!(Placement::default(), Placement::Centered);
    Ok(())
}

#[test]
fn seed_overlap() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid = Grid::new(8, 8)?;

    seed(
        &mut grid,
        &[SeedRequest::from("blinkers"), SeedRequest::from("void")],
        Placement::Origin,
        &mut rng,
    );
    assert_eq!(grid.population(), 0);

    seed(
        &mut grid,
        &[SeedRequest::from("random"), SeedRequest::from("clapper")],
        Placement::Origin,
        &mut rng,
    );
    assert_eq!(grid.population(), 6);
    Ok(())
}

#[test]
fn seed_random() -> Result<(), Error> {
    let mut grid = Grid::new(16, 16)?;
    let mut other = Grid::new(16, 16)?;
    seed(
        &mut grid,
        &[SeedRequest::Random],
        Placement::Centered,
        &mut StdRng::seed_from_u64(42),
    );
    seed(
        &mut other,
        &[SeedRequest::Random],
        Placement::Centered,
        &mut StdRng::seed_from_u64(42),
    );
    assert_eq!(grid, other);
    assert!(grid.population() > 0 && grid.population() < 256);
    assert!(grid.is_border_clear());
    Ok(())
}

#[test]
fn seed_unknown() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(3);
    let mut grid = Grid::new(8, 16)?;
    seed(
        &mut grid,
        &[SeedRequest::from("untitled"), SeedRequest::from("no such pattern")],
        Placement::Centered,
        &mut rng,
    );
    assert_eq!(grid.population(), 0);
    seed(
        &mut grid,
        &[SeedRequest::from("glider"), SeedRequest::from("typo")],
        Placement::Centered,
        &mut rng,
    );
    assert_eq!(grid.population(), 5);
    Ok(())
}

#[test]
fn seed_carousel() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(5);
    let mut grid = Grid::new(8, 16)?;
    for _ in 0..50 {
        seed(&mut grid, &[SeedRequest::Carousel], Placement::Centered, &mut rng);
        assert!(grid.population() > 0);
        assert!(grid.is_border_clear());
    }
    Ok(())
}

#[test]
fn seed_footprint() -> Result<(), Error> {
    let glider = [SeedRequest::from("glider")];
    let mut shapes = HashSet::new();
    for n in 0..32 {
        let mut rng = StdRng::seed_from_u64(n);
        let mut grid = Grid::new(8, 16)?;
        seed(&mut grid, &glider, Placement::Centered, &mut rng);
        assert_eq!(grid.population(), 5);
        let mut cells = Vec::new();
        for row in 0..8 {
            for col in 0..16 {
                if grid.get(row, col) == ALIVE {
                    assert!((4..12).contains(&col));
                    cells.push((row, col));
                }
            }
        }
        shapes.insert(cells);

        seed(&mut grid, &glider, Placement::Origin, &mut rng);
        assert_eq!(grid.population(), 5);
        for row in 0..8 {
            for col in 8..16 {
                assert_eq!(grid.get(row, col), DEAD);
            }
        }
    }
    assert!(shapes.len() > 1);
    Ok(())
}
