mod placement;
mod validation;
