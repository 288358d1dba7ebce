use hearth_common::HearthError;
use hearth_widgets::tilt::{transform_for, CardRect, Pointer};

pub fn run(card: &str, pointer: Option<&str>) -> Result<(), HearthError> {
    let card = CardRect::parse(card)?;
    let pointer = pointer.map(Pointer::parse).transpose()?;
    println!("{}", transform_for(&card, pointer.as_ref()));
    Ok(())
}
