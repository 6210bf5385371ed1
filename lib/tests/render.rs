use ledlife_lib::{Error, Grid, PixelDisplay, PixelRenderer, RenderSink, TextRenderer, ALIVE};
use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

/// An LED panel that only remembers what it was told.
#[derive(Default)]
struct Panel {
    initialized: bool,
    brightness: Option<u8>,
    frame: BTreeSet<(usize, usize)>,
    shown: Vec<BTreeSet<(usize, usize)>>,
}

impl PixelDisplay for Panel {
    fn init(&mut self) -> Result<(), Error> {
        self.initialized = true;
        Ok(())
    }

    fn set_brightness(&mut self, brightness: u8) -> Result<(), Error> {
        self.brightness = Some(brightness);
        Ok(())
    }

    fn fill(&mut self, on: bool) {
        assert!(!on);
        self.frame.clear();
    }

    fn pixel(&mut self, x: usize, y: usize, on: bool) {
        if on {
            self.frame.insert((x, y));
        } else {
            self.frame.remove(&(x, y));
        }
    }

    fn show(&mut self) -> Result<(), Error> {
        self.shown.push(self.frame.clone());
        Ok(())
    }
}

#[test]
fn text() -> Result<(), Error> {
    let mut grid = Grid::new(1, 2)?;
    grid.set(0, 0, ALIVE);
    assert_eq!(
        TextRenderer::<Vec<u8>>::display(&grid),
        " . . . .\n . O . .\n . . . .\n\n"
    );

    let mut sink = TextRenderer::new(Vec::new());
    sink.render(&grid)?;
    sink.render(&grid)?;
    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(out, " . . . .\n . O . .\n . . . .\n\n".repeat(2));
    Ok(())
}

#[test]
fn pixel_setup() -> Result<(), Error> {
    let renderer = PixelRenderer::new(Panel::default(), 15, false)?;
    let panel = renderer.into_inner();
    assert!(panel.initialized);
    assert_eq!(panel.brightness, Some(15));
    assert_eq!(panel.shown, vec![BTreeSet::new()]);
    Ok(())
}

#[test]
fn pixel_mapping() -> Result<(), Error> {
    let mut grid = Grid::new(8, 16)?;
    grid.set(1, 10, ALIVE);
    grid.set(7, 0, ALIVE);

    let mut plain = PixelRenderer::new(Panel::default(), 0, false)?;
    plain.render(&grid)?;
    let expected: BTreeSet<(usize, usize)> = [(10, 1), (0, 7)].into_iter().collect();
    assert_eq!(plain.display().shown.last(), Some(&expected));

    let mut rotated = PixelRenderer::new(Panel::default(), 0, true)?;
    assert_eq!(rotated.pixel_of(1, 10), (9, 2));
    assert_eq!(rotated.pixel_of(7, 0), (7, 0));
    rotated.render(&grid)?;
    let expected: BTreeSet<(usize, usize)> = [(9, 2), (7, 0)].into_iter().collect();
    assert_eq!(rotated.display().shown.last(), Some(&expected));
    Ok(())
}

#[test]
fn pixel_does_not_touch_grid() -> Result<(), Error> {
    let mut grid = Grid::new(8, 8)?;
    grid.set(3, 3, ALIVE);
    let before = grid.clone();
    let mut renderer = PixelRenderer::new(Panel::default(), 3, true)?;
    renderer.render(&grid)?;
    renderer.render(&grid)?;
    assert_eq!(grid, before);
    assert_eq!(renderer.display().shown.len(), 3);
    Ok(())
}

#[test]
fn fan_out() -> Result<(), Error> {
    struct Named(&'static str, Rc<RefCell<Vec<&'static str>>>);

    impl RenderSink for Named {
        fn render(&mut self, _: &Grid) -> Result<(), Error> {
            self.1.borrow_mut().push(self.0);
            Ok(())
        }
    }

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut sinks: Vec<Box<dyn RenderSink>> = vec![
        Box::new(Named("text", log.clone())),
        Box::new(Named("pixel", log.clone())),
    ];
    let grid = Grid::new(2, 2)?;
    sinks.render(&grid)?;
    sinks.render(&grid)?;
    assert_eq!(*log.borrow(), vec!["text", "pixel", "text", "pixel"]);
    Ok(())
}
