pub mod judge;
pub mod session;
pub mod sheet;
pub mod solved;

pub use judge::Judge;
pub use session::Session;
pub use sheet::{ProblemEntry, SheetEntry, SheetPayload, SheetRequest, SheetResult};
pub use solved::SolvedSets;
