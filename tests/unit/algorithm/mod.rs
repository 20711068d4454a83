mod propagation;
mod selection;
