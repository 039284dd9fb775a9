pub mod featurecollection;
