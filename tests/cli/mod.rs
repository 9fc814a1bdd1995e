mod preset;
