use std::fmt;

use super::{Cell, Geometry};

impl Geometry {
    fn write_cell(&self, f: &mut fmt::Formatter<'_>, cell: &Cell) -> fmt::Result {
        write!(f, "cell {}", self.path(cell).unwrap_or("?"))?;
        f.write_str(" : surfaces =")?;
        for sense_surface in cell.surfaces() {
            let sign = if sense_surface.sense { '+' } else { '-' };
            match self.surface_user_id(sense_surface.surface) {
                Some(user) => write!(f, " {sign}{user}")?,
                None => write!(f, " {sign}?")?,
            }
        }
        if let Some(fill) = cell.fill().and_then(|id| self.universe(id)) {
            write!(f, " ; fill = {} (instance {})", fill.user_id(), fill.internal_id())
        } else if let Some(material) = cell.material() {
            write!(f, " ; material = {}", material.id())
        } else if cell.is_void() {
            f.write_str(" ; void")
        } else {
            f.write_str(" ; unbound")
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for universe in self.universes() {
            writeln!(f, "---- universe = {}", universe.user_id())?;
            for cell in universe.cells().iter().filter_map(|&id| self.cell(id)) {
                self.write_cell(f, cell)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
