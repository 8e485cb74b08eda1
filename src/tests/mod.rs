pub mod unit_atom_encoder;
