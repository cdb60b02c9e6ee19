// =============================================================================
// Milestone 1: The round world the socket understands
// =============================================================================

pub trait RoundPeg {
    fn radius(&self) -> u32;
}

#[derive(Debug, Clone, Copy)]
pub struct RoundSocket {
    radius: u32,
}

impl RoundSocket {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn fits(&self, plug: &dyn RoundPeg) -> bool {
        self.radius >= plug.radius()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RoundPowerPlug {
    radius: u32,
}

impl RoundPowerPlug {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }
}

impl RoundPeg for RoundPowerPlug {
    fn radius(&self) -> u32 {
        self.radius
    }
}

// =============================================================================
// Milestone 2: An incompatible plug and its adapter
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct SquarePowerPlug {
    width: u32,
}

impl SquarePowerPlug {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

/// A circle inscribed in a square has a diameter equal to the square's side,
/// so the adapted radius is `width / 2`.
pub struct SquarePowerPlugAdapter<'a> {
    plug: &'a SquarePowerPlug,
}

impl<'a> SquarePowerPlugAdapter<'a> {
    pub fn new(plug: &'a SquarePowerPlug) -> Self {
        Self { plug }
    }
}

impl RoundPeg for SquarePowerPlugAdapter<'_> {
    fn radius(&self) -> u32 {
        self.plug.width() / 2
    }
}

fn main() {
    let socket = RoundSocket::new(5);
    let round = RoundPowerPlug::new(5);
    println!(
        "RoundPowerPlug of radius: {} -- fits to RoundSocket of radius ({}) : {}",
        round.radius(),
        socket.radius(),
        socket.fits(&round)
    );

    for width in [10, 20] {
        let square = SquarePowerPlug::new(width);
        let adapter = SquarePowerPlugAdapter::new(&square);
        println!(
            "SquarePowerPlug of width: {} -- fits (Using Adapter) to RoundSocket of radius ({}) : {}",
            square.width(),
            socket.radius(),
            socket.fits(&adapter)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_plug_fits() {
        let socket = RoundSocket::new(5);
        assert!(socket.fits(&RoundPowerPlug::new(5)));
        assert!(socket.fits(&RoundPowerPlug::new(3)));
        assert!(!socket.fits(&RoundPowerPlug::new(6)));
    }

    #[test]
    fn test_adapted_square_plugs() {
        let socket = RoundSocket::new(5);
        let small = SquarePowerPlug::new(10);
        let large = SquarePowerPlug::new(20);
        assert!(socket.fits(&SquarePowerPlugAdapter::new(&small)));
        assert!(!socket.fits(&SquarePowerPlugAdapter::new(&large)));
    }

    #[test]
    fn test_adapter_radius_rounds_down() {
        let odd = SquarePowerPlug::new(11);
        assert_eq!(SquarePowerPlugAdapter::new(&odd).radius(), 5);
    }
}
