// Application layer: concrete pipelines composed from domain ports and adapters.

pub mod pipelines;
